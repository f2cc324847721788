// ABOUTME: Rule-based weekly plan assembler choosing the closest-calorie recipe per meal slot
// ABOUTME: Filters by diet, buckets by meal type, splits the energy target by slot ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # Rule-Based Plan Assembler
//!
//! Greedy, per-slot selection: for every slot the recipe whose calories are
//! closest to `daily_target * slot_share` wins, ties going to the recipe that
//! appears first in the corpus. The same recipe may fill a slot on every day of
//! the week; there is no cross-day deduplication and no global optimization.

use chrono::NaiveDate;
use sofra_core::errors::{AppError, AppResult};
use sofra_core::models::{MealPlan, MealType, MealsPerDay, Recipe, UserProfile};
use tracing::debug;

use crate::config::MealPlanningConfig;
use crate::dietary_filter::filter_by_diet;
use crate::meal_classifier::classify_by_meal_type;
use crate::nutrition_calculator::daily_energy_target;

/// Recipe whose calories are closest to `target_kcal`
///
/// Ties keep the earliest recipe. Returns `None` for an empty slice.
#[must_use]
pub fn select_closest(candidates: &[Recipe], target_kcal: f64) -> Option<&Recipe> {
    let mut best: Option<(&Recipe, f64)> = None;
    for recipe in candidates {
        let difference = (f64::from(recipe.calories) - target_kcal).abs();
        match best {
            Some((_, best_difference)) if difference >= best_difference => {}
            _ => best = Some((recipe, difference)),
        }
    }
    best.map(|(recipe, _)| recipe)
}

/// Per-slot calorie targets for a daily energy target
#[must_use]
pub fn slot_targets(
    daily_calories: u32,
    meals: MealsPerDay,
    config: &MealPlanningConfig,
) -> Vec<(MealType, f64)> {
    meals
        .slots()
        .iter()
        .copied()
        .zip(config.planning.slot_ratios.shares(meals).iter())
        .map(|(meal_type, share)| (meal_type, f64::from(daily_calories) * share))
        .collect()
}

/// Assemble a seven-day plan from the recipe corpus
///
/// # Errors
///
/// - `INVALID_INPUT` when the profile's energy target cannot be computed
/// - `NO_ELIGIBLE_RECIPES` when the dietary filter leaves nothing, or when a
///   requested slot's bucket is empty
pub fn assemble_plan(
    profile: &UserProfile,
    recipes: &[Recipe],
    meals: MealsPerDay,
    start_date: NaiveDate,
    config: &MealPlanningConfig,
) -> AppResult<MealPlan> {
    let daily_calories = daily_energy_target(profile, &config.nutrition)?;

    let eligible = filter_by_diet(recipes, &profile.dietary_preferences);
    if eligible.is_empty() {
        return Err(AppError::no_eligible_recipes(format!(
            "No recipes match the dietary preferences ({} recipes in corpus)",
            recipes.len()
        )));
    }

    let buckets = classify_by_meal_type(&eligible, &config.planning.classifier);

    let mut choices = Vec::with_capacity(meals.slots().len());
    for (meal_type, target_kcal) in slot_targets(daily_calories, meals, config) {
        let recipe = select_closest(buckets.bucket(meal_type), target_kcal).ok_or_else(|| {
            AppError::no_eligible_recipes(format!(
                "No eligible recipes for {meal_type} after dietary filtering"
            ))
        })?;
        debug!(
            meal_type = %meal_type,
            target_kcal,
            recipe_id = %recipe.id,
            recipe_kcal = recipe.calories,
            "Selected recipe for slot"
        );
        choices.push((meal_type, recipe.id.clone()));
    }

    let mut days = MealPlan::empty_week(start_date)?;
    for day in &mut days {
        day.meals.extend(choices.iter().cloned());
    }

    MealPlan::new(profile.id, start_date, days)
}
