// ABOUTME: Main library entry point for the Sofra meal planning engine
// ABOUTME: Wires nutrition targets, AI and rule-based plan generation, and grocery lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

#![deny(unsafe_code)]

//! # Sofra
//!
//! Recommends a week of meals for one person and turns the plan into a
//! consolidated shopping list.
//!
//! ## Architecture
//!
//! - **`sofra-core`**: errors, constants, and the profile/recipe/plan/grocery models
//! - **`sofra-intelligence`**: pure algorithms (targets, filtering, assembly, validation,
//!   aggregation)
//! - **Engine**: AI-first plan generation with rule-based fallback
//! - **LLM / Generation**: Gemini client, prompt, response parsing and retries
//! - **Store / Services**: storage seam and the workflows built on it
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sofra::config::{AiConfig, MealPlanningConfig};
//! use sofra::engine::MealPlanningEngine;
//! use sofra::errors::AppResult;
//! use sofra::models::{MealsPerDay, Recipe, UserProfile};
//!
//! async fn weekly_plan(profile: &UserProfile, corpus: &[Recipe]) -> AppResult<()> {
//!     let engine =
//!         MealPlanningEngine::from_ai_config(MealPlanningConfig::default(), AiConfig::from_env()?)?;
//!     let generated = engine.generate_plan(profile, corpus, MealsPerDay::Three).await?;
//!     println!("{} plan starting {}", generated.source, generated.plan.start_date);
//!     Ok(())
//! }
//! ```

/// Runtime configuration
pub mod config;

/// Planning engine entry points
pub mod engine;

/// Unified error handling, shared with the workspace crates
pub mod errors;

/// AI-backed plan generation
pub mod generation;

/// LLM provider abstraction and Gemini client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Store-backed workflows
pub mod services;

/// Storage abstraction and backends
pub mod store;

pub use sofra_core::{constants, models};
pub use sofra_intelligence as intelligence;
