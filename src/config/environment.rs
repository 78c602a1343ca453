// ABOUTME: Environment-based server configuration with per-service credential handling
// ABOUTME: Missing credentials disable features at call time instead of failing startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Server configuration loaded from environment variables

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default path of the curated recipe collection
const DEFAULT_RECIPE_DATABASE_PATH: &str = "data/recipes.json";

/// Default per-provider web search result bound
const DEFAULT_SEARCH_MAX_RESULTS: usize = 5;

/// LLM provider configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Gemini API key; `None` disables recognition and generation
    pub gemini_api_key: Option<String>,
    /// Model override (defaults to the provider's default model)
    pub gemini_model: Option<String>,
}

impl LlmConfig {
    /// Whether the generative features can be served at all
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

/// Web search provider configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Google Programmable Search API key; `None` skips that provider
    pub google_cse_api_key: Option<String>,
    /// Google Programmable Search engine ID
    pub google_cse_id: Option<String>,
    /// Per-provider result bound
    pub max_results: usize,
}

/// Curated recipe collection configuration
#[derive(Debug, Clone)]
pub struct RecipeDatabaseConfig {
    /// Path to the recipes JSON file
    pub path: PathBuf,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port for the API
    pub http_port: u16,
    /// Allowed CORS origins ("*" for any)
    pub cors_origins: Vec<String>,
    /// LLM provider settings
    pub llm: LlmConfig,
    /// Web search settings
    pub search: SearchConfig,
    /// Recipe collection settings
    pub recipes: RecipeDatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse (e.g. a
    /// non-numeric `HTTP_PORT`). Absent credentials are not errors.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            cors_origins: parse_origins(&env_var_or("CORS_ORIGINS", "*")),
            llm: LlmConfig {
                gemini_api_key: env::var("GEMINI_API_KEY").ok(),
                gemini_model: env::var("GEMINI_MODEL").ok(),
            },
            search: SearchConfig {
                google_cse_api_key: env::var("GOOGLE_SEARCH_API_KEY").ok(),
                google_cse_id: env::var("CUSTOM_SEARCH_ENGINE_ID").ok(),
                max_results: env_var_or(
                    "SEARCH_MAX_RESULTS",
                    &DEFAULT_SEARCH_MAX_RESULTS.to_string(),
                )
                .parse()
                .context("Invalid SEARCH_MAX_RESULTS value")?,
            },
            recipes: RecipeDatabaseConfig {
                path: PathBuf::from(env_var_or(
                    "RECIPE_DATABASE_PATH",
                    DEFAULT_RECIPE_DATABASE_PATH,
                )),
            },
        };

        Ok(config)
    }

    /// One-line startup overview with credentials redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Sous-Chef Server Configuration:\n\
             - HTTP Port: {}\n\
             - Recipe Database: {}\n\
             - Gemini: {}\n\
             - Google Programmable Search: {}\n\
             - Search Result Bound: {}",
            self.http_port,
            self.recipes.path.display(),
            if self.llm.is_configured() {
                "configured"
            } else {
                "NOT CONFIGURED (recognition/generation disabled)"
            },
            if self.search.google_cse_api_key.is_some() && self.search.google_cse_id.is_some() {
                "configured"
            } else {
                "not configured (skipped)"
            },
            self.search.max_results,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
