// ABOUTME: Ingredient recognition and recipe generation route handlers
// ABOUTME: Thin axum handlers over the matcher, formatter, LLM, and search layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Recipe routes
//!
//! Two endpoints:
//! - `POST /recognize_ingredients`: photo in, lowercase ingredient names out
//! - `POST /generate_recipes`: ingredient list in, canonical recipes out
//!
//! Partial success is preferred over total failure: when the database
//! yields matches and generation fails, the matches alone are returned.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use base64::Engine;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm::{
    prompts::{
        generation_prompt_with_matches, generation_prompt_with_snippets, search_query,
        RECOGNITION_PROMPT,
    },
    ChatMessage, ChatRequest, ImageData, LlmProvider,
};
use crate::recipes::{
    coerce_generated_batch, merge_by_title, parse_generated, to_canonical, CanonicalRecipe,
};
use crate::resources::ServerResources;
use crate::search::gather_snippets;

/// Default serving count when the request omits it
const DEFAULT_SERVINGS: u32 = 2;

/// Fallback MIME type when the payload carries no data-URL prefix
const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

// ============================================================================
// Request Types
// ============================================================================

/// Request body for ingredient recognition
#[derive(Debug, Deserialize)]
pub struct RecognizeIngredientsRequest {
    /// Image as a data URL or raw base64
    #[serde(default)]
    pub image: Option<String>,
}

/// Request body for recipe generation
#[derive(Debug, Deserialize)]
pub struct GenerateRecipesRequest {
    /// Ingredients to cook with (required, non-empty)
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    /// Dietary preference tags ("vegetarian", "vegan")
    #[serde(default)]
    pub dietary: Vec<String>,
    /// Desired serving count
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Cuisine tag, or "any"
    #[serde(default = "default_cuisine")]
    pub cuisine: String,
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

fn default_cuisine() -> String {
    "any".to_owned()
}

// ============================================================================
// Routes
// ============================================================================

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the recipe-domain routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recognize_ingredients", post(Self::recognize_ingredients))
            .route("/generate_recipes", post(Self::generate_recipes))
            .with_state(resources)
    }

    /// Split an incoming payload into MIME type and bare base64 data,
    /// validating that the data actually decodes.
    fn parse_image_payload(raw: &str) -> Result<ImageData, AppError> {
        let (mime_type, data_base64) = raw.strip_prefix("data:").map_or_else(
            || (DEFAULT_IMAGE_MIME.to_owned(), raw),
            |rest| {
                let mime = rest
                    .split(';')
                    .next()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(DEFAULT_IMAGE_MIME)
                    .to_owned();
                let data = rest.split_once(',').map_or("", |(_, data)| data);
                (mime, data)
            },
        );

        base64::engine::general_purpose::STANDARD
            .decode(data_base64)
            .map_err(|e| {
                AppError::invalid_input("Failed to process the image.").with_source(e)
            })?;

        Ok(ImageData {
            mime_type,
            data_base64: data_base64.to_owned(),
        })
    }

    /// Parse the model's comma-separated ingredient listing
    fn parse_ingredient_listing(text: &str) -> Vec<String> {
        text.trim()
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// `POST /recognize_ingredients`
    async fn recognize_ingredients(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RecognizeIngredientsRequest>,
    ) -> Result<Response, AppError> {
        let llm = resources
            .llm
            .as_deref()
            .ok_or_else(|| AppError::not_configured("AI ingredient recognition"))?;

        let raw = request
            .image
            .ok_or_else(|| AppError::missing_field("image"))?;

        info!("received image recognition request");
        let image = Self::parse_image_payload(&raw)?;

        let response = llm
            .complete_vision(RECOGNITION_PROMPT, &image)
            .await
            .map_err(|e| {
                warn!(error = %e, "image recognition failed upstream");
                AppError::external_service("Failed to process the image.")
            })?;

        let ingredients = Self::parse_ingredient_listing(&response.content);
        info!(count = ingredients.len(), "parsed recognized ingredients");

        Ok((StatusCode::OK, Json(ingredients)).into_response())
    }

    /// `POST /generate_recipes`
    async fn generate_recipes(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GenerateRecipesRequest>,
    ) -> Result<Response, AppError> {
        let ingredients = request
            .ingredients
            .ok_or_else(|| AppError::missing_field("ingredients"))?;
        if ingredients.is_empty() {
            return Err(AppError::invalid_input("ingredients must not be empty"));
        }

        let llm = resources
            .llm
            .as_deref()
            .ok_or_else(|| AppError::not_configured("AI recipe generation"))?;

        info!(
            ingredients = ingredients.len(),
            dietary = ?request.dietary,
            servings = request.servings,
            cuisine = %request.cuisine,
            "received recipe generation request"
        );

        // 1. Match and format curated recipes
        let base: Vec<CanonicalRecipe> = resources
            .database
            .find_matches(&ingredients, &request.dietary, &request.cuisine)
            .into_iter()
            .map(to_canonical)
            .collect();

        // 2. Build the generation prompt, from matches or from web snippets
        let prompt = if base.is_empty() {
            let query = search_query(&ingredients, &request.dietary, &request.cuisine);
            let snippets = gather_snippets(
                &resources.search_providers,
                &query,
                resources.config.search.max_results,
            )
            .await;

            if snippets.is_empty() {
                return Err(AppError::not_found(
                    "Could not find any information online for the given ingredients.",
                ));
            }

            generation_prompt_with_snippets(
                &ingredients,
                &request.dietary,
                request.servings,
                &request.cuisine,
                &snippets,
            )
        } else {
            info!(matches = base.len(), "using database matches as negative context");
            generation_prompt_with_matches(
                &ingredients,
                &request.dietary,
                request.servings,
                &request.cuisine,
                &base,
            )
        };

        // 3. Generate, falling back to the curated matches on failure
        let additional = match Self::generate_additional(llm, &prompt).await {
            Ok(recipes) => recipes,
            Err(e) if !base.is_empty() => {
                warn!(error = %e, "generation failed, returning database matches only");
                return Ok((StatusCode::OK, Json(base)).into_response());
            }
            Err(e) => {
                warn!(error = %e, "generation failed with no database matches");
                return Err(AppError::external_service("Failed to generate recipes."));
            }
        };

        // 4. Combine and de-duplicate
        let merged = merge_by_title(base, additional);
        info!(total = merged.len(), "returning combined recipes");

        Ok((StatusCode::OK, Json(merged)).into_response())
    }

    /// One generation round-trip: complete, parse, coerce
    async fn generate_additional(
        llm: &dyn LlmProvider,
        prompt: &str,
    ) -> Result<Vec<CanonicalRecipe>, AppError> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        let response = llm.complete(&request).await?;
        let items = parse_generated(&response.content)?;
        Ok(coerce_generated_batch(&items))
    }
}
