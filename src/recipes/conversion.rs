// ABOUTME: Canonical output shaping: curated formatting, generated-JSON coercion, merging
// ABOUTME: Every recipe leaving the service passes through one of these functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Conversion into the canonical recipe shape
//!
//! Three concerns live here:
//! - [`to_canonical`]: the pure, total mapping from a curated
//!   [`Recipe`] into the wire shape, with fixed defaults for every
//!   absent field
//! - [`parse_generated`] / [`coerce_generated`]: a strict parse step
//!   for untrusted model output, with explicit field-presence checks
//!   instead of assuming well-formed input
//! - [`merge_by_title`]: de-duplication of generated recipes against
//!   the curated base set, case-insensitive on the title

use std::collections::HashSet;

use serde_json::Value;
use tracing::warn;

use crate::errors::{AppError, ErrorCode};

use super::models::{CanonicalRecipe, Recipe, ServingCount};

/// Substitution note attached to every curated recipe
const CURATED_SUGGESTION: &str = "This is a curated recipe from our database.";

/// Placeholder for absent values
const NOT_AVAILABLE: &str = "N/A";

/// Default difficulty when the collection does not specify one
const DEFAULT_DIFFICULTY: &str = "Medium";

/// Render an optional loosely-typed JSON scalar, falling back to "N/A"
fn display_or_na(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

/// Convert a curated recipe into the canonical output shape
///
/// Pure and total: the only "failure mode" is substituting a fixed
/// default for an absent field.
#[must_use]
pub fn to_canonical(recipe: &Recipe) -> CanonicalRecipe {
    let title = if recipe.title.is_empty() {
        NOT_AVAILABLE.to_owned()
    } else {
        recipe.title.clone()
    };

    let description = recipe.description.clone().unwrap_or_else(|| {
        format!("A delicious {} recipe from our database.", recipe.cuisine)
    });

    let servings = match &recipe.servings {
        Some(ServingCount::Number(n)) => format!("Serves {n}"),
        Some(ServingCount::Text(s)) => format!("Serves {s}"),
        None => format!("Serves {NOT_AVAILABLE}"),
    };

    CanonicalRecipe {
        title,
        description,
        ingredients: recipe
            .ingredients
            .iter()
            .map(|ing| format!("{} {}", ing.quantity, ing.name))
            .collect(),
        instructions: recipe.steps.clone(),
        cooking_time: recipe.cooking_time,
        difficulty: recipe
            .difficulty
            .clone()
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_owned()),
        nutritional_info: format!(
            "Calories: {}, Protein: {}g",
            display_or_na(recipe.nutrition.calories.as_ref()),
            display_or_na(recipe.nutrition.protein.as_ref()),
        ),
        servings,
        substitution_suggestions: vec![CURATED_SUGGESTION.to_owned()],
    }
}

/// Parse raw model output into a JSON array of candidate recipe objects
///
/// Strips optional markdown code-fence markers first. A payload that is
/// not a JSON array fails the generation step as a whole; per-item
/// problems are left to [`coerce_generated`].
///
/// # Errors
///
/// Returns a serialization error when the cleaned text is not a JSON array.
pub fn parse_generated(raw: &str) -> Result<Vec<Value>, AppError> {
    let cleaned = raw
        .trim()
        .replace("```json", "")
        .replace("```", "");
    let cleaned = cleaned.trim();

    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(AppError::new(
            ErrorCode::SerializationError,
            "Generated content is not a JSON array",
        )),
        Err(e) => Err(AppError::new(
            ErrorCode::SerializationError,
            "Generated content is not valid JSON",
        )
        .with_source(e)),
    }
}

/// Coerce one untrusted generated object into the canonical shape
///
/// An object whose title is missing or blank is a contract violation
/// from the generator and is dropped (with a warning) rather than
/// failing the batch. Every other field falls back to the same defaults
/// curated recipes use.
#[must_use]
pub fn coerce_generated(item: &Value) -> Option<CanonicalRecipe> {
    let title = item
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_owned();

    let string_list = |key: &str| -> Vec<String> {
        item.get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    };

    let cooking_time = match item.get("cookingTime") {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0) as u32,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };

    let servings = match item.get("servings") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => format!("Serves {n}"),
        _ => format!("Serves {NOT_AVAILABLE}"),
    };

    let nutritional_info = match item.get("nutritionalInfo") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => format!("Calories: {NOT_AVAILABLE}, Protein: {NOT_AVAILABLE}g"),
    };

    Some(CanonicalRecipe {
        title,
        description: item
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        ingredients: string_list("ingredients"),
        instructions: string_list("instructions"),
        cooking_time,
        difficulty: item
            .get("difficulty")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_DIFFICULTY)
            .to_owned(),
        nutritional_info,
        servings,
        substitution_suggestions: string_list("substitution_suggestions"),
    })
}

/// Coerce a whole generated batch, dropping malformed items
#[must_use]
pub fn coerce_generated_batch(items: &[Value]) -> Vec<CanonicalRecipe> {
    items
        .iter()
        .filter_map(|item| {
            let coerced = coerce_generated(item);
            if coerced.is_none() {
                warn!("dropping generated recipe without a usable title");
            }
            coerced
        })
        .collect()
}

/// Merge generated recipes into the curated base set, de-duplicating by title
///
/// Base recipes are always kept first in their original order; later
/// entries whose title already appeared (case-insensitive) are dropped.
#[must_use]
pub fn merge_by_title(
    base: Vec<CanonicalRecipe>,
    additional: Vec<CanonicalRecipe>,
) -> Vec<CanonicalRecipe> {
    let mut seen: HashSet<String> = base.iter().map(|r| r.title.to_lowercase()).collect();
    let mut merged = base;

    for recipe in additional {
        if seen.insert(recipe.title.to_lowercase()) {
            merged.push(recipe);
        }
    }

    merged
}
