// ABOUTME: Recipe domain module: collection, matching heuristics, and output shaping
// ABOUTME: Everything a request needs from the curated recipe side of the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Recipe domain for the Sous-Chef server
//!
//! - **Models**: the curated [`Recipe`](models::Recipe) record and the
//!   canonical wire shape shared by curated and generated recipes
//! - **Database**: the read-only collection loaded once at startup
//! - **Matching**: ingredient coverage, dietary, and cuisine filters
//! - **Conversion**: canonical formatting, coercion of generated JSON,
//!   and merge/de-duplication by title

/// Canonical formatting, generated-JSON coercion, and title de-duplication
pub mod conversion;
/// The read-only recipe collection
pub mod database;
/// Matching heuristics over the collection
pub mod matching;
/// Recipe data models
pub mod models;

pub use conversion::{
    coerce_generated, coerce_generated_batch, merge_by_title, parse_generated, to_canonical,
};
pub use database::RecipeDatabase;
pub use models::{CanonicalRecipe, NutritionFacts, Recipe, RecipeIngredient};
