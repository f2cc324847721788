// ABOUTME: Advisory plan review comparing a plan's average daily nutrition to profile targets
// ABOUTME: Reports calorie and protein deviations and too-low energy intake as data, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::fmt;

use serde::{Deserialize, Serialize};
use sofra_core::errors::AppResult;
use sofra_core::models::{DailyMealSlot, MealPlan, Recipe, UserProfile};

use crate::config::MealPlanningConfig;
use crate::corpus::RecipeIndex;
use crate::nutrition_calculator::compute_targets;

/// Summed or averaged nutrition for a day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// A soft problem found in a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanIssue {
    /// Average calories deviate from the target beyond tolerance
    CalorieDeviation {
        /// Average daily calories
        average: f64,
        /// Daily calorie target
        target: f64,
        /// Relative deviation (0.2 = 20 %)
        deviation: f64,
    },
    /// Average protein deviates from the target beyond tolerance
    ProteinDeviation {
        /// Average daily protein (g)
        average: f64,
        /// Daily protein target (g)
        target: f64,
        /// Relative deviation
        deviation: f64,
    },
    /// Average calories fall below the safe minimum
    BelowMinimumCalories {
        /// Average daily calories
        average: f64,
        /// Minimum daily calories
        minimum: f64,
    },
}

impl fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CalorieDeviation {
                average,
                target,
                deviation,
            } => write!(
                f,
                "Average calories {average:.0} kcal deviate {:.0}% from the {target:.0} kcal target",
                deviation * 100.0
            ),
            Self::ProteinDeviation {
                average,
                target,
                deviation,
            } => write!(
                f,
                "Average protein {average:.0} g deviates {:.0}% from the {target:.0} g target",
                deviation * 100.0
            ),
            Self::BelowMinimumCalories { average, minimum } => write!(
                f,
                "Average calories {average:.0} kcal are below the {minimum:.0} kcal minimum"
            ),
        }
    }
}

/// Result of reviewing a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanValidation {
    /// `true` when no issue was found
    pub is_valid: bool,
    /// Issues found, in check order
    pub issues: Vec<PlanIssue>,
    /// Average daily nutrition over the plan's days
    pub average_nutrition: NutritionSummary,
}

/// Sum the nutrition of every resolvable recipe in one day
///
/// Ids missing from the corpus contribute zero.
#[must_use]
pub fn day_nutrition(day: &DailyMealSlot, index: &RecipeIndex<'_>) -> NutritionSummary {
    day.meals
        .values()
        .filter_map(|id| index.get(id))
        .fold(NutritionSummary::default(), |total, recipe| {
            NutritionSummary {
                calories: total.calories + f64::from(recipe.calories),
                protein_g: total.protein_g + recipe.protein_g,
                carbs_g: total.carbs_g + recipe.carbs_g,
                fat_g: total.fat_g + recipe.fat_g,
            }
        })
}

/// Average daily nutrition across the plan
#[must_use]
pub fn average_nutrition(plan: &MealPlan, index: &RecipeIndex<'_>) -> NutritionSummary {
    if plan.days.is_empty() {
        return NutritionSummary::default();
    }
    let day_count = plan.days.len() as f64;
    let total = plan
        .days
        .iter()
        .map(|day| day_nutrition(day, index))
        .fold(NutritionSummary::default(), |total, day| NutritionSummary {
            calories: total.calories + day.calories,
            protein_g: total.protein_g + day.protein_g,
            carbs_g: total.carbs_g + day.carbs_g,
            fat_g: total.fat_g + day.fat_g,
        });

    NutritionSummary {
        calories: total.calories / day_count,
        protein_g: total.protein_g / day_count,
        carbs_g: total.carbs_g / day_count,
        fat_g: total.fat_g / day_count,
    }
}

fn relative_deviation(average: f64, target: f64) -> Option<f64> {
    (target > 0.0).then(|| (average - target).abs() / target)
}

/// Review a plan against the profile's targets
///
/// Checks, in order: calorie deviation above 15 %, protein deviation above
/// 20 %, average calories below 1200. The plan is never rejected; issues are
/// returned for the caller to surface.
///
/// # Errors
///
/// Returns `INVALID_INPUT` only when the profile's targets cannot be computed
pub fn validate(
    profile: &UserProfile,
    plan: &MealPlan,
    recipes: &[Recipe],
    config: &MealPlanningConfig,
) -> AppResult<PlanValidation> {
    let targets = compute_targets(profile, &config.nutrition)?;
    let tolerances = &config.planning.validation;
    let index = RecipeIndex::new(recipes);
    let average = average_nutrition(plan, &index);

    let mut issues = Vec::new();

    let calorie_target = f64::from(targets.calories);
    if let Some(deviation) = relative_deviation(average.calories, calorie_target) {
        if deviation > tolerances.calorie_tolerance {
            issues.push(PlanIssue::CalorieDeviation {
                average: average.calories,
                target: calorie_target,
                deviation,
            });
        }
    }

    let protein_target = f64::from(targets.macros.protein_g);
    if let Some(deviation) = relative_deviation(average.protein_g, protein_target) {
        if deviation > tolerances.protein_tolerance {
            issues.push(PlanIssue::ProteinDeviation {
                average: average.protein_g,
                target: protein_target,
                deviation,
            });
        }
    }

    if average.calories < tolerances.minimum_daily_calories {
        issues.push(PlanIssue::BelowMinimumCalories {
            average: average.calories,
            minimum: tolerances.minimum_daily_calories,
        });
    }

    Ok(PlanValidation {
        is_valid: issues.is_empty(),
        issues,
        average_nutrition: average,
    })
}
