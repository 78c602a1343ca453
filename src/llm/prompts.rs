// ABOUTME: Prompt construction for ingredient recognition and recipe generation
// ABOUTME: Centralizes the fixed prompt templates sent to the LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Prompt builders
//!
//! Two generation prompts exist: one that feeds the database matches
//! back as negative context ("do not repeat these"), used when the
//! matcher found something, and one grounded in web-search snippets,
//! used when it did not.

use crate::recipes::CanonicalRecipe;

/// Fixed prompt for ingredient recognition from an image
pub const RECOGNITION_PROMPT: &str = "Analyze the image and identify all food ingredients. \
    Return them as a simple comma-separated list. \
    Example: tomatoes, onions, chicken breast.";

/// Schema reminder appended to both generation prompts
const SCHEMA_INSTRUCTIONS: &str = r#"For each recipe, provide: "title", "description", "ingredients" (list), "instructions" (list), "cookingTime" (integer), "difficulty", "nutritionalInfo", "servings", and "substitution_suggestions" (list of strings).
Format the final output as a valid JSON array of recipe objects. Do not include markdown."#;

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_owned()
    } else {
        items.join(", ")
    }
}

/// Build the generation prompt using database matches as negative context
///
/// Asks for recipes that are new and different from the curated matches
/// already being returned.
#[must_use]
pub fn generation_prompt_with_matches(
    ingredients: &[String],
    dietary: &[String],
    servings: u32,
    cuisine: &str,
    matches: &[CanonicalRecipe],
) -> String {
    let matches_json =
        serde_json::to_string_pretty(matches).unwrap_or_else(|_| "[]".to_owned());

    format!(
        "You are a creative recipe assistant. A user wants to cook with: {}.\n\
         They want a {cuisine} style recipe for {servings} people, with dietary preferences: {}.\n\n\
         I have already found these recipes in my database:\n\
         --- DATABASE RECIPES ---\n\
         {matches_json}\n\
         --- END DATABASE RECIPES ---\n\n\
         Please generate 1-2 NEW and DIFFERENT creative recipes that also fit the user's request. \
         Do NOT repeat the recipes I provided above.\n\n\
         {SCHEMA_INSTRUCTIONS}",
        ingredients.join(", "),
        join_or_none(dietary),
    )
}

/// Build the generation prompt grounded in web-search snippets
#[must_use]
pub fn generation_prompt_with_snippets(
    ingredients: &[String],
    dietary: &[String],
    servings: u32,
    cuisine: &str,
    snippets: &[String],
) -> String {
    format!(
        "Based on the following web search results, generate 2-3 unique recipes for \
         {servings} servings using these main ingredients: {}.\n\
         Cuisine: {cuisine}. Dietary preferences: {}.\n\
         Adjust ingredient quantities for {servings} servings.\n\n\
         {SCHEMA_INSTRUCTIONS}\n\n\
         Search results for context:\n\
         ---\n\
         {}\n\
         ---",
        ingredients.join(", "),
        join_or_none(dietary),
        snippets.join("\n"),
    )
}

/// Build the web search query for a generation request
#[must_use]
pub fn search_query(ingredients: &[String], dietary: &[String], cuisine: &str) -> String {
    let mut query = if cuisine.is_empty() || cuisine.eq_ignore_ascii_case("any") {
        format!("recipes with {}", ingredients.join(" "))
    } else {
        format!("{cuisine} recipes with {}", ingredients.join(" "))
    };
    if !dietary.is_empty() {
        query.push_str(&format!(" that are {}", dietary.join(" ")));
    }
    query
}
