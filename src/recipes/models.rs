// ABOUTME: Data models for the curated recipe collection and the canonical output shape
// ABOUTME: Defines Recipe, RecipeIngredient, NutritionFacts, and CanonicalRecipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single ingredient entry in a curated recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name ("cherry tomatoes")
    pub name: String,
    /// Free-text quantity ("200g", "2 cups")
    pub quantity: String,
}

/// Nutrition facts attached to a curated recipe
///
/// Values are kept loosely typed: community-sourced collections mix
/// numbers ("450") and strings ("approx. 450") for the same field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Calories per serving, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<Value>,
    /// Protein grams per serving, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<Value>,
}

/// Serving count, which collections store as either a number or a string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServingCount {
    /// Plain serving count
    Number(u32),
    /// Free-text serving description ("4-6")
    Text(String),
}

/// A curated recipe as stored in the collection
///
/// Loaded once at process start and never mutated. Absent optional
/// fields deserialize to defaults so a partially filled collection
/// still loads; a recipe without an `ingredients` array simply has
/// zero ingredients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe title (blank titles render as "N/A" downstream)
    #[serde(default)]
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Cuisine tag, matched case-insensitively
    #[serde(default)]
    pub cuisine: String,
    /// Ingredient list
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Ordered preparation steps
    #[serde(default)]
    pub steps: Vec<String>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cooking_time: u32,
    /// Difficulty label ("Easy", "Medium", "Hard", or free text)
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Nutrition facts
    #[serde(default)]
    pub nutrition: NutritionFacts,
    /// Serving count
    #[serde(default)]
    pub servings: Option<ServingCount>,
}

impl Recipe {
    /// Lowercased ingredient names, the unit every matcher filter works on
    #[must_use]
    pub fn ingredient_names_lower(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ing| ing.name.to_lowercase())
            .collect()
    }
}

/// The canonical recipe shape returned to callers
///
/// Both curated and AI-generated recipes are coerced into this shape
/// before leaving the service; every element of a response list
/// conforms to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecipe {
    /// Recipe title
    pub title: String,
    /// Short description
    pub description: String,
    /// Display strings combining quantity and name ("200g cherry tomatoes")
    pub ingredients: Vec<String>,
    /// Ordered instructions
    pub instructions: Vec<String>,
    /// Cooking time in minutes
    #[serde(rename = "cookingTime")]
    pub cooking_time: u32,
    /// Difficulty label
    pub difficulty: String,
    /// Rendered nutrition line ("Calories: 450, Protein: 20g")
    #[serde(rename = "nutritionalInfo")]
    pub nutritional_info: String,
    /// Rendered servings line ("Serves 4")
    pub servings: String,
    /// Ingredient substitution suggestions
    pub substitution_suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_missing_ingredients_field() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"title": "Mystery Stew", "cuisine": "Fusion", "steps": ["simmer"]}"#,
        )
        .unwrap();
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.cooking_time, 0);
    }

    #[test]
    fn test_servings_number_or_text() {
        let numeric: Recipe =
            serde_json::from_str(r#"{"title": "A", "servings": 4}"#).unwrap();
        let text: Recipe =
            serde_json::from_str(r#"{"title": "B", "servings": "4-6"}"#).unwrap();
        assert!(matches!(numeric.servings, Some(ServingCount::Number(4))));
        assert!(matches!(text.servings, Some(ServingCount::Text(ref s)) if s == "4-6"));
    }

    #[test]
    fn test_canonical_wire_field_names() {
        let canonical = CanonicalRecipe {
            title: "Test".into(),
            description: String::new(),
            ingredients: vec![],
            instructions: vec![],
            cooking_time: 25,
            difficulty: "Easy".into(),
            nutritional_info: "Calories: N/A, Protein: N/Ag".into(),
            servings: "Serves 2".into(),
            substitution_suggestions: vec![],
        };
        let json = serde_json::to_value(&canonical).unwrap();
        assert_eq!(json["cookingTime"], 25);
        assert!(json.get("nutritionalInfo").is_some());
        assert!(json.get("substitution_suggestions").is_some());
    }
}
