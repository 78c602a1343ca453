// ABOUTME: Read-only recipe collection loaded once at startup
// ABOUTME: A missing or corrupt collection degrades to empty instead of failing the process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! The curated recipe collection
//!
//! Loaded from a JSON array at process start and shared read-only
//! across all requests. Loading problems disable matching (empty
//! collection) rather than aborting startup.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::models::Recipe;

/// In-memory read-only recipe collection
#[derive(Debug, Default)]
pub struct RecipeDatabase {
    recipes: Vec<Recipe>,
}

impl RecipeDatabase {
    /// Build a collection from already-parsed recipes (used by tests)
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load the collection from a JSON file
    ///
    /// Never fails: a missing file or invalid JSON yields an empty
    /// collection with a warning, leaving the matching feature disabled.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "recipe collection not found, matching disabled"
                );
                return Self::default();
            }
        };

        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(recipes) => {
                info!(
                    count = recipes.len(),
                    path = %path.display(),
                    "loaded recipe collection"
                );
                Self { recipes }
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "could not decode recipe collection, matching disabled"
                );
                Self::default()
            }
        }
    }

    /// All recipes in the collection
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the collection is empty (matching disabled)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
