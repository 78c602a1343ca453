// ABOUTME: HTTP server assembly binding routes, middleware, and shared resources
// ABOUTME: Builds the axum router and runs the accept loop until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Server assembly and lifecycle

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use http::{header::HeaderName, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, RecipeRoutes};

/// Request body limit; image payloads arrive base64-encoded in JSON
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Per-request timeout covering the slowest path (search plus generation)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// The Sous-Chef HTTP server
pub struct RecipeServer {
    resources: Arc<ServerResources>,
}

impl RecipeServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble the full router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes(self.resources.clone()))
            .merge(RecipeRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(&self.resources.config.cors_origins))
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
    }

    /// Bind and serve until the process is terminated
    ///
    /// # Errors
    ///
    /// Returns an error when the port cannot be bound or the accept
    /// loop fails.
    pub async fn run(&self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.resources.config.http_port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

        info!("Sous-Chef server listening on {addr}");
        axum::serve(listener, self.router())
            .await
            .context("HTTP server error")
    }
}

/// Configure CORS from the configured origin list
///
/// A list of `["*"]` (the default) allows any origin; otherwise only
/// the listed origins are permitted. Unparseable entries are skipped.
fn setup_cors(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o.trim()).ok())
            .collect();
        if parsed.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(parsed)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("access-control-request-method"),
            HeaderName::from_static("access-control-request-headers"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
