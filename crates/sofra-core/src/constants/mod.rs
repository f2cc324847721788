// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Plan shape constants and service identifiers for the meal planning engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one large file.

/// Meal plan shape and weekday labels
pub mod plan;

/// Service names used in structured logging
pub mod service_names {
    /// Engine service name
    pub const SOFRA_ENGINE: &str = "sofra";
    /// Name used for the Gemini text-completion service in errors and logs
    pub const GEMINI: &str = "Gemini";
}
