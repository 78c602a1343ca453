// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven configuration for ports, credentials, and data paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! Configuration module for the Sous-Chef server
//!
//! Environment-only configuration: every knob is an environment variable
//! with a sensible default, and missing external credentials disable the
//! corresponding feature at call time rather than failing startup.

/// Environment and server configuration
pub mod environment;
