// ABOUTME: Nutrition target calculation: Mifflin-St Jeor BMR, TDEE, goal adjustment, macro split
// ABOUTME: Pure functions over a profile and an explicitly passed configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! Nutrition Calculator Module
//!
//! Computes the daily energy target and macronutrient gram targets that drive
//! both plan generators and the plan validator.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use serde::{Deserialize, Serialize};
use sofra_core::errors::{AppError, AppResult};
use sofra_core::models::{ActivityLevel, SexFormula, UserProfile};

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionTargetConfig};

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrates (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

/// Complete daily target bundle for a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily energy target (kcal/day)
    pub calories: u32,
    /// Macro gram targets derived from `calories`
    pub macros: MacroTargets,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male branch: +5
/// - Female branch: -161
///
/// # Errors
///
/// Returns `INVALID_INPUT` if weight or height is not positive, or if the
/// profile's sex is `Other` without an explicit formula branch
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> AppResult<f64> {
    if !profile.weight_kg.is_finite() || profile.weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be a positive number"));
    }
    if !profile.height_cm.is_finite() || profile.height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be a positive number"));
    }

    let sex_constant = match profile.sex_formula()? {
        SexFormula::Male => config.msj_male_constant,
        SexFormula::Female => config.msj_female_constant,
    };

    Ok(config.msj_weight_coef * profile.weight_kg
        + config.msj_height_coef * profile.height_cm
        + config.msj_age_coef * f64::from(profile.age)
        + sex_constant)
}

/// Calculate Total Daily Energy Expenditure: BMR x activity factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Daily energy target in kcal, rounded to the nearest integer
///
/// TDEE plus the goal adjustment (-500 lose, 0 maintain, +300 gain). A
/// negative result is clamped to zero.
///
/// # Errors
///
/// Returns `INVALID_INPUT` for non-positive weight/height or an unresolved
/// formula branch
pub fn daily_energy_target(profile: &UserProfile, config: &NutritionTargetConfig) -> AppResult<u32> {
    let bmr = calculate_bmr(profile, &config.bmr)?;
    Ok(energy_target_from_bmr(bmr, profile, config))
}

fn energy_target_from_bmr(bmr: f64, profile: &UserProfile, config: &NutritionTargetConfig) -> u32 {
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let target = tdee + config.goal_adjustments.adjustment_for(profile.goal);
    target.round().max(0.0) as u32
}

/// Split a calorie total into protein, carbohydrate and fat grams
///
/// Ratios come from the profile's goal; each gram figure is rounded
/// independently, so the grams may not re-sum exactly to `total_calories`.
#[must_use]
pub fn macro_targets(
    profile: &UserProfile,
    total_calories: u32,
    config: &NutritionTargetConfig,
) -> MacroTargets {
    let ratio = config.macro_ratios.ratio_for(profile.goal);
    let density = &config.energy_density;
    let total = f64::from(total_calories);

    MacroTargets {
        protein_g: grams(total * ratio.protein, density.protein_kcal_per_g),
        carbs_g: grams(total * ratio.carbs, density.carbs_kcal_per_g),
        fat_g: grams(total * ratio.fat, density.fat_kcal_per_g),
    }
}

fn grams(kcal: f64, kcal_per_g: f64) -> u32 {
    (kcal / kcal_per_g).round().max(0.0) as u32
}

/// Compute BMR, TDEE, energy target and macro targets in one pass
///
/// # Errors
///
/// Same conditions as [`daily_energy_target`]
pub fn compute_targets(
    profile: &UserProfile,
    config: &NutritionTargetConfig,
) -> AppResult<NutritionTargets> {
    let bmr = calculate_bmr(profile, &config.bmr)?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let calories = energy_target_from_bmr(bmr, profile, config);

    Ok(NutritionTargets {
        bmr,
        tdee,
        calories,
        macros: macro_targets(profile, calories, config),
    })
}
