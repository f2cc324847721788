// ABOUTME: Core types and constants for the Sofra meal planning engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

#![deny(unsafe_code)]

//! # Sofra Core
//!
//! Foundation crate providing shared types and constants for the meal planning
//! engine. It changes infrequently, which keeps incremental builds of the
//! algorithm crate and the main crate fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Plan shape and weekday labels
//! - **models**: Profiles, recipes, meal plans, grocery items

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
