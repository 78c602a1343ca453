// ABOUTME: Recipe matching heuristics: cuisine, ingredient coverage, and dietary filters
// ABOUTME: Survivors are ranked by ingredient count and truncated to a bounded result set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Matching heuristics over the curated collection
//!
//! A recipe qualifies when it passes three filters in order: cuisine
//! tag equality (unless "any"), ingredient coverage (every requested
//! ingredient must substring-match at least one recipe ingredient,
//! case-insensitively), and dietary compatibility. Survivors are sorted
//! descending by ingredient count (a proxy for completeness) and
//! truncated to [`MAX_MATCHES`].

use tracing::debug;

use super::database::RecipeDatabase;
use super::models::Recipe;

/// Upper bound on matcher output
pub const MAX_MATCHES: usize = 3;

/// Sentinel cuisine value that disables the cuisine filter
pub const ANY_CUISINE: &str = "any";

/// Ingredients that disqualify a recipe from being vegetarian
const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "shrimp", "fish", "salmon",
];

/// Ingredients that additionally disqualify a recipe from being vegan
const DAIRY_EGG_KEYWORDS: &[&str] = &["milk", "cheese", "butter", "yogurt", "cream", "eggs"];

/// Whether a recipe contains none of the meat keywords
fn is_vegetarian(joined_ingredients: &str) -> bool {
    MEAT_KEYWORDS.iter().all(|meat| !joined_ingredients.contains(meat))
}

/// Whether a recipe is vegetarian and contains none of the dairy/egg keywords
fn is_vegan(joined_ingredients: &str) -> bool {
    is_vegetarian(joined_ingredients)
        && DAIRY_EGG_KEYWORDS
            .iter()
            .all(|dairy| !joined_ingredients.contains(dairy))
}

/// Every requested ingredient must substring-match at least one recipe
/// ingredient; matches may reuse the same recipe ingredient. An empty
/// request list passes vacuously (callers validate non-emptiness at the
/// HTTP boundary).
fn covers_all_ingredients(recipe_ingredients: &[String], requested: &[String]) -> bool {
    requested.iter().all(|user_ing| {
        let user_ing = user_ing.to_lowercase();
        recipe_ingredients
            .iter()
            .any(|rec_ing| rec_ing.contains(&user_ing))
    })
}

impl RecipeDatabase {
    /// Find up to [`MAX_MATCHES`] recipes satisfying the requested
    /// ingredients, dietary tags, and cuisine.
    #[must_use]
    pub fn find_matches(
        &self,
        ingredients: &[String],
        dietary: &[String],
        cuisine: &str,
    ) -> Vec<&Recipe> {
        let cuisine_pref = if cuisine.is_empty() {
            ANY_CUISINE.to_owned()
        } else {
            cuisine.to_lowercase()
        };
        let wants_vegetarian = dietary.iter().any(|d| d == "vegetarian");
        let wants_vegan = dietary.iter().any(|d| d == "vegan");

        let mut matches: Vec<&Recipe> = self
            .recipes()
            .iter()
            .filter(|recipe| {
                if cuisine_pref != ANY_CUISINE && recipe.cuisine.to_lowercase() != cuisine_pref {
                    return false;
                }

                let names_lower = recipe.ingredient_names_lower();
                if !covers_all_ingredients(&names_lower, ingredients) {
                    return false;
                }

                let joined = names_lower.join(" ");
                if wants_vegetarian && !is_vegetarian(&joined) {
                    return false;
                }
                if wants_vegan && !is_vegan(&joined) {
                    return false;
                }

                true
            })
            .collect();

        debug!(
            candidates = matches.len(),
            requested = ingredients.len(),
            cuisine = %cuisine_pref,
            "database matching complete"
        );

        // Stable sort keeps collection order among recipes of equal size
        matches.sort_by(|a, b| b.ingredients.len().cmp(&a.ingredients.len()));
        matches.truncate(MAX_MATCHES);
        matches
    }
}
