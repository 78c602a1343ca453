// ABOUTME: Liveness and readiness route handlers for service monitoring
// ABOUTME: Readiness reports the recipe collection size and which providers are wired up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Health check routes
//!
//! `/health` is plain liveness. `/ready` describes what this instance
//! can actually serve: how many curated recipes loaded, whether the
//! generative features have credentials, and how many search providers
//! are registered. An instance without an LLM key still serves matching,
//! so it reports "degraded" rather than failing the check.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
            .with_state(resources)
    }

    async fn health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let generation_enabled = resources.llm.is_some();
        let status = if generation_enabled { "ready" } else { "degraded" };

        Json(json!({
            "status": status,
            "recipes": resources.database.len(),
            "generation_enabled": generation_enabled,
            "search_providers": resources.search_providers.len(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
