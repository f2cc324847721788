// ABOUTME: Configuration management module for runtime settings read from the environment
// ABOUTME: Exposes the AI generation settings; algorithm tables live in sofra-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! Configuration module
//!
//! - **AI**: text-completion service credentials, generation parameters and retry policy
//! - **Algorithms**: re-exported from `sofra_intelligence::config`

/// AI text-completion service configuration
pub mod ai;

pub use ai::AiConfig;
pub use sofra_intelligence::config::MealPlanningConfig;
