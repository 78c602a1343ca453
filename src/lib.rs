// ABOUTME: Main library entry point for the Sous-Chef recipe suggestion backend
// ABOUTME: Wires together recipe matching, LLM generation, web search, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

#![deny(unsafe_code)]

//! # Sous-Chef Server
//!
//! A backend service that turns a photo of ingredients (or a typed
//! ingredient list) into recipe suggestions. Ingredients are recognized
//! with a vision-capable LLM, matched against a curated local recipe
//! collection, and complemented with freshly generated recipes.
//!
//! ## Architecture
//!
//! - **Recipes**: static collection, matching heuristics, and the
//!   canonical output shape shared by curated and generated recipes
//! - **LLM**: provider abstraction with a Google Gemini implementation
//!   (text generation and image understanding)
//! - **Search**: best-effort web snippet gathering from independent
//!   providers, used as generation context when the database has no match
//! - **Routes**: thin axum handlers over the above
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sous_chef::config::environment::ServerConfig;
//! use sous_chef::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Sous-Chef configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management (environment-driven)
pub mod config;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Production logging configuration with structured output
pub mod logging;

/// Recipe collection, matching, and canonical output conversion
pub mod recipes;

/// Shared server resources (dependency injection aggregate)
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Best-effort web search providers
pub mod search;

/// HTTP server assembly and serve loop
pub mod server;
