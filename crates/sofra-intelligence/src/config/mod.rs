// ABOUTME: Configuration module for sofra-intelligence crate
// ABOUTME: Nutrition target tables and plan assembly settings passed explicitly to algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! Algorithm configuration.
//!
//! Every algorithm in this crate takes its configuration by reference. There is
//! no process-wide instance; callers build a [`MealPlanningConfig`] (usually
//! `MealPlanningConfig::default()`) and pass it down.

/// Configuration error types
pub mod error;
/// Nutrition target coefficients and tables
pub mod nutrition;
/// Classifier, slot ratio and validation settings
pub mod planning;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, EnergyDensityConfig, GoalAdjustmentConfig, MacroRatio,
    MacroRatioConfig, NutritionTargetConfig,
};
pub use planning::{ClassifierConfig, PlanningConfig, SlotRatioConfig, ValidationConfig};

/// Root configuration for the meal planning algorithms
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealPlanningConfig {
    /// Energy and macro target settings
    pub nutrition: NutritionTargetConfig,
    /// Plan assembly settings
    pub planning: PlanningConfig,
}

impl MealPlanningConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.planning.validate()
    }
}
