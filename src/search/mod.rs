// ABOUTME: Best-effort web search: independent providers queried sequentially
// ABOUTME: Provider failures are isolated and logged, never fatal to the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! # Web Search Providers
//!
//! Gathers text snippets from N independent sources as generation
//! context. Providers are queried one after another; a failing provider
//! contributes zero snippets and a warning, nothing more. The caller
//! receives the concatenation of whatever succeeded.

mod duckduckgo;
mod google_cse;

pub use duckduckgo::DuckDuckGoProvider;
pub use google_cse::GoogleCseProvider;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::AppError;

/// A single web search source
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Unique provider identifier (e.g., "duckduckgo")
    fn name(&self) -> &'static str;

    /// Run one query, returning up to `max_results` text snippets
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, AppError>;
}

/// Query every provider sequentially, concatenating whatever succeeds
///
/// Failures are isolated per provider; an empty result simply means no
/// provider produced anything.
pub async fn gather_snippets(
    providers: &[Box<dyn SearchProvider>],
    query: &str,
    max_results: usize,
) -> Vec<String> {
    let mut snippets = Vec::new();

    for provider in providers {
        match provider.search(query, max_results).await {
            Ok(results) => {
                debug!(
                    provider = provider.name(),
                    count = results.len(),
                    "search provider returned snippets"
                );
                snippets.extend(results);
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "search provider failed");
            }
        }
    }

    snippets
}
