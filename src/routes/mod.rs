// ABOUTME: Route module organization for the Sous-Chef HTTP endpoints
// ABOUTME: Thin handlers organized by domain, delegating to the core modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! HTTP routes
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the recipe, LLM, and search layers.

/// Health check and system status routes
pub mod health;
/// Ingredient recognition and recipe generation routes
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::{GenerateRecipesRequest, RecipeRoutes, RecognizeIngredientsRequest};
