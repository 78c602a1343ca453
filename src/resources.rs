// ABOUTME: Shared server resources built once at startup and injected into handlers
// ABOUTME: Holds the config, the read-only recipe collection, and the external providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Dependency injection aggregate for request handlers
//!
//! Everything here is constructed in `main`, wrapped in an `Arc`, and
//! shared read-only across requests; nothing mutates after startup.

use std::sync::Arc;

use tracing::info;

use crate::config::environment::ServerConfig;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::recipes::RecipeDatabase;
use crate::search::{DuckDuckGoProvider, GoogleCseProvider, SearchProvider};

/// Shared, immutable server resources
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Curated recipe collection
    pub database: RecipeDatabase,
    /// LLM provider; `None` when no API key is configured
    pub llm: Option<Box<dyn LlmProvider>>,
    /// Web search providers, in query order
    pub search_providers: Vec<Box<dyn SearchProvider>>,
}

impl ServerResources {
    /// Build resources from configuration
    ///
    /// Loads the recipe collection and instantiates whichever external
    /// providers have credentials. Absent credentials disable features
    /// without failing startup.
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let database = RecipeDatabase::load(&config.recipes.path);

        let llm: Option<Box<dyn LlmProvider>> =
            config.llm.gemini_api_key.as_ref().map(|key| {
                let mut provider = GeminiProvider::new(key.clone());
                if let Some(model) = &config.llm.gemini_model {
                    provider = provider.with_default_model(model.clone());
                }
                Box::new(provider) as Box<dyn LlmProvider>
            });
        if llm.is_none() {
            info!("GEMINI_API_KEY not set; recognition and generation are disabled");
        }

        let mut search_providers: Vec<Box<dyn SearchProvider>> =
            vec![Box::new(DuckDuckGoProvider::new())];
        match (
            &config.search.google_cse_api_key,
            &config.search.google_cse_id,
        ) {
            (Some(key), Some(cx)) => {
                search_providers.push(Box::new(GoogleCseProvider::new(key.clone(), cx.clone())));
            }
            _ => info!("Google CSE API key or engine ID not provided; skipping Google Search"),
        }

        Self {
            config,
            database,
            llm,
            search_providers,
        }
    }

    /// Convenience constructor returning the `Arc` handlers expect
    #[must_use]
    pub fn shared(config: ServerConfig) -> Arc<Self> {
        Arc::new(Self::from_config(config))
    }
}
