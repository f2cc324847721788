// ABOUTME: Configuration error types for meal planning configuration validation
// ABOUTME: Defines error variants for invalid ranges and ratios that do not sum to one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! Configuration error types for meal planning configuration validation.

use sofra_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Ratios don't sum to 1.0
    #[error("Invalid ratios: {0}")]
    InvalidRatios(&'static str),

    /// Lower bound above upper bound
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
