// ABOUTME: Meal swapping: replace one slot of a plan and search replacement candidates
// ABOUTME: Candidate search combines text search, a calorie window, dietary tags, and quick filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sofra_core::errors::{AppError, AppResult, ErrorCode};
use sofra_core::models::{DietaryTag, MealPlan, MealType, Recipe, RecipeId};

use crate::corpus::RecipeIndex;
use crate::dietary_filter::is_allowed;

/// Minimum protein (g) for the high-protein filter
pub const HIGH_PROTEIN_MIN_G: f64 = 20.0;
/// Maximum calories for the low-calorie filter
pub const LOW_CALORIE_MAX_KCAL: u32 = 300;
/// Maximum prep + cook minutes for the quick filter
pub const QUICK_MAX_MINUTES: u32 = 30;
/// Default half-width of the calorie window around a target
pub const DEFAULT_CALORIE_WINDOW_KCAL: u32 = 100;

/// Quick toggles offered when browsing replacements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickFilter {
    /// Protein >= 20 g
    HighProtein,
    /// Calories <= 300 kcal
    LowCalorie,
    /// Prep + cook <= 30 minutes
    Quick,
}

impl QuickFilter {
    fn accepts(self, recipe: &Recipe) -> bool {
        match self {
            Self::HighProtein => recipe.protein_g >= HIGH_PROTEIN_MIN_G,
            Self::LowCalorie => recipe.calories <= LOW_CALORIE_MAX_KCAL,
            Self::Quick => recipe.total_minutes() <= QUICK_MAX_MINUTES,
        }
    }
}

/// Criteria for listing replacement recipes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapCriteria {
    /// Case-insensitive search over title and description
    #[serde(default)]
    pub search: Option<String>,
    /// Keep recipes within the calorie window around this target
    #[serde(default)]
    pub target_calories: Option<u32>,
    /// Half-width of the calorie window; defaults to 100 kcal
    #[serde(default)]
    pub calorie_window: Option<u32>,
    /// Dietary tags every candidate must satisfy
    #[serde(default)]
    pub dietary_tags: BTreeSet<DietaryTag>,
    /// Quick filters, all of which must pass
    #[serde(default)]
    pub filters: Vec<QuickFilter>,
}

impl SwapCriteria {
    fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(query) = self.search.as_deref().map(str::trim) {
            if !query.is_empty() {
                let query = query.to_lowercase();
                if !recipe.title.to_lowercase().contains(&query)
                    && !recipe.description.to_lowercase().contains(&query)
                {
                    return false;
                }
            }
        }

        if let Some(target) = self.target_calories {
            let window = self.calorie_window.unwrap_or(DEFAULT_CALORIE_WINDOW_KCAL);
            if recipe.calories.abs_diff(target) > window {
                return false;
            }
        }

        is_allowed(recipe, &self.dietary_tags)
            && self.filters.iter().all(|filter| filter.accepts(recipe))
    }
}

/// Recipes that could replace `current`, in corpus order
///
/// The current recipe itself is never offered.
#[must_use]
pub fn swap_candidates<'a>(
    recipes: &'a [Recipe],
    current: &RecipeId,
    criteria: &SwapCriteria,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.id != *current && criteria.matches(recipe))
        .collect()
}

/// Copy of `plan` with one slot pointing at `replacement`
///
/// # Errors
///
/// - `VALUE_OUT_OF_RANGE` when `day_index` is not a day of the plan
/// - `RESOURCE_NOT_FOUND` when `replacement` is not in `recipes`
pub fn swap_meal(
    plan: &MealPlan,
    day_index: usize,
    meal_type: MealType,
    replacement: &RecipeId,
    recipes: &[Recipe],
) -> AppResult<MealPlan> {
    if !RecipeIndex::new(recipes).contains(replacement) {
        return Err(AppError::not_found(format!("Recipe {replacement}")));
    }

    let mut updated = plan.clone();
    let day = updated.days.get_mut(day_index).ok_or_else(|| {
        AppError::new(
            ErrorCode::ValueOutOfRange,
            format!(
                "Day index {day_index} is outside the plan (0..{})",
                plan.days.len()
            ),
        )
    })?;
    day.meals.insert(meal_type, replacement.clone());
    Ok(updated)
}
