// ABOUTME: Domain service layer combining the planning engine with a meal plan store
// ABOUTME: Provides storage-aware workflows reusable by the CLI and any future API layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! Domain service layer
//!
//! The engine is pure with respect to storage; services load inputs from a
//! [`crate::store::MealPlanStore`], call the engine, and persist the results.

/// Plan generation, refresh gating, swapping, and grocery lists for stored plans
pub mod meal_plans;

pub use meal_plans::MealPlanService;
