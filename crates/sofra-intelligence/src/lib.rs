// ABOUTME: Meal planning intelligence: nutrition targets, dietary filtering, and plan assembly
// ABOUTME: Pure synchronous algorithms shared by the AI-backed and rule-based generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

#![deny(unsafe_code)]

//! # Sofra Intelligence
//!
//! Algorithms behind the meal planning engine. Nothing here performs I/O; every
//! function takes its configuration by reference and returns new values
//! without mutating its inputs.

/// Algorithm configuration tables
pub mod config;
/// Recipe lookup by id
pub mod corpus;
/// Dietary tag exclusion rules
pub mod dietary_filter;
/// Grocery list aggregation and text export
pub mod grocery_aggregator;
/// Meal-type classification
pub mod meal_classifier;
/// Slot replacement and candidate search
pub mod meal_swap;
/// Energy and macro targets
pub mod nutrition_calculator;
/// Rule-based weekly plan assembly
pub mod plan_assembler;
/// Advisory plan review
pub mod plan_validator;

pub use config::MealPlanningConfig;
pub use corpus::RecipeIndex;
pub use dietary_filter::filter_by_diet;
pub use grocery_aggregator::{aggregate, group_by_category, render_shopping_list};
pub use meal_classifier::{classify_by_meal_type, MealBuckets};
pub use meal_swap::{swap_candidates, swap_meal, QuickFilter, SwapCriteria};
pub use nutrition_calculator::{
    compute_targets, daily_energy_target, macro_targets, MacroTargets, NutritionTargets,
};
pub use plan_assembler::assemble_plan;
pub use plan_validator::{day_nutrition, validate, NutritionSummary, PlanIssue, PlanValidation};
