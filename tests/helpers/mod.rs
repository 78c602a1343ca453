// ABOUTME: Test helper module exports for integration tests
// ABOUTME: Provides axum route testing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

pub mod axum_test;
