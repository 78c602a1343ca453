// ABOUTME: DuckDuckGo search provider using the keyless Instant Answer JSON API
// ABOUTME: Collects abstract text and related-topic snippets for a query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! DuckDuckGo Instant Answer provider
//!
//! Uses the free JSON endpoint at <https://api.duckduckgo.com/>, which
//! needs no API key. Coverage is thinner than a full search index, but
//! the service only needs a handful of context snippets and treats an
//! empty result as "this provider found nothing".

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::SearchProvider;
use crate::errors::AppError;

/// Instant Answer API endpoint
const API_URL: &str = "https://api.duckduckgo.com/";

/// Instant Answer response (fields we consume)
#[derive(Debug, Deserialize)]
struct InstantAnswerResponse {
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

/// A related topic; groups nest one level deep under `Topics`
#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "Text", default)]
    text: String,
    #[serde(rename = "Topics", default)]
    topics: Vec<RelatedTopic>,
}

/// DuckDuckGo search provider
#[derive(Debug, Default)]
pub struct DuckDuckGoProvider {
    client: Client,
}

impl DuckDuckGoProvider {
    /// Create a new provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten the one-level topic nesting into plain snippet strings
    fn collect_snippets(response: &InstantAnswerResponse, max_results: usize) -> Vec<String> {
        let mut snippets = Vec::new();

        if !response.abstract_text.is_empty() {
            snippets.push(response.abstract_text.clone());
        }

        for topic in &response.related_topics {
            if snippets.len() >= max_results {
                break;
            }
            if !topic.text.is_empty() {
                snippets.push(topic.text.clone());
            }
            for sub in &topic.topics {
                if snippets.len() >= max_results {
                    break;
                }
                if !sub.text.is_empty() {
                    snippets.push(sub.text.clone());
                }
            }
        }

        snippets.truncate(max_results);
        snippets
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    fn name(&self) -> &'static str {
        "duckduckgo"
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, AppError> {
        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("DuckDuckGo request failed").with_source(e)
            })?
            .error_for_status()
            .map_err(|e| {
                AppError::external_service("DuckDuckGo returned an error status").with_source(e)
            })?;

        let parsed: InstantAnswerResponse = response.json().await.map_err(|e| {
            AppError::external_service("DuckDuckGo response was unparseable").with_source(e)
        })?;

        let snippets = Self::collect_snippets(&parsed, max_results);
        debug!(count = snippets.len(), "DuckDuckGo search complete");
        Ok(snippets)
    }
}
