// ABOUTME: Google Programmable Search provider using the Custom Search JSON API
// ABOUTME: Renders results as "title: snippet" strings for generation context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Google Programmable Search provider
//!
//! Requires an API key plus a search engine ID (`cx`). When either is
//! missing the provider is simply not registered, so requests fall back
//! to the remaining providers.
//!
//! API reference: <https://developers.google.com/custom-search/v1/overview>

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::SearchProvider;
use crate::errors::AppError;

/// Custom Search JSON API endpoint
const API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Custom Search response (fields we consume)
#[derive(Debug, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<CseItem>,
}

/// One search result
#[derive(Debug, Deserialize)]
struct CseItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

/// Google Programmable Search provider
#[derive(Debug)]
pub struct GoogleCseProvider {
    client: Client,
    api_key: String,
    engine_id: String,
}

impl GoogleCseProvider {
    /// Create a new provider with credentials
    #[must_use]
    pub fn new(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            engine_id: engine_id.into(),
        }
    }

    fn render_items(items: &[CseItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| format!("{}: {}", item.title, item.snippet))
            .collect()
    }
}

#[async_trait]
impl SearchProvider for GoogleCseProvider {
    fn name(&self) -> &'static str {
        "google_cse"
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, AppError> {
        // The API caps `num` at 10
        let num = max_results.min(10).to_string();

        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("Google search request failed").with_source(e)
            })?
            .error_for_status()
            .map_err(|e| {
                AppError::external_service("Google search returned an error status")
                    .with_source(e)
            })?;

        let parsed: CseResponse = response.json().await.map_err(|e| {
            AppError::external_service("Google search response was unparseable").with_source(e)
        })?;

        let snippets = Self::render_items(&parsed.items);
        debug!(count = snippets.len(), "Google search complete");
        Ok(snippets)
    }
}
