// ABOUTME: Error types re-exported from sofra-core for use across the root crate
// ABOUTME: Keeps one AppError/ErrorCode taxonomy for the engine, store, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # Unified Error Handling
//!
//! Every fallible operation returns [`AppResult`]. Codes are grouped by range:
//! permissions (1000), validation (3000), resources (4000), external services
//! and AI responses (5000), configuration (6000), internal (9000).

pub use sofra_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
