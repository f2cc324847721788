// ABOUTME: Meal-type classifier bucketing recipes into breakfast, lunch, dinner, and snack
// ABOUTME: Rules combine calorie windows with egg-ingredient and title keyword checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use sofra_core::models::{MealType, Recipe};

use crate::config::ClassifierConfig;

/// Recipes grouped by meal-type suitability
///
/// A recipe may appear in several buckets. Order within each bucket follows the
/// input order, which matters for the assembler's tie-break.
#[derive(Debug, Clone, Default)]
pub struct MealBuckets {
    /// Breakfast candidates
    pub breakfast: Vec<Recipe>,
    /// Lunch candidates
    pub lunch: Vec<Recipe>,
    /// Dinner candidates
    pub dinner: Vec<Recipe>,
    /// Snack candidates
    pub snack: Vec<Recipe>,
}

impl MealBuckets {
    /// Candidates for a meal type
    #[must_use]
    pub fn bucket(&self, meal_type: MealType) -> &[Recipe] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    fn bucket_mut(&mut self, meal_type: MealType) -> &mut Vec<Recipe> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }
}

fn has_egg(recipe: &Recipe, config: &ClassifierConfig) -> bool {
    config
        .egg_keywords
        .iter()
        .any(|keyword| recipe.has_ingredient_matching(keyword))
}

fn title_has_any(recipe: &Recipe, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| recipe.title_contains(keyword))
}

/// Whether `recipe` suits `meal_type`
///
/// - breakfast: calories < 400, or an egg ingredient, or a smoothie/bowl title
/// - lunch: 300 <= calories <= 600, or a salad/soup title
/// - dinner: 400 <= calories <= 700, and no egg ingredient, and not a smoothie/bowl
/// - snack: calories < 250
#[must_use]
pub fn suits(recipe: &Recipe, meal_type: MealType, config: &ClassifierConfig) -> bool {
    let calories = recipe.calories;
    match meal_type {
        MealType::Breakfast => {
            calories < config.breakfast_max_calories
                || has_egg(recipe, config)
                || title_has_any(recipe, &config.breakfast_title_keywords)
        }
        MealType::Lunch => {
            let (low, high) = config.lunch_calorie_range;
            (low..=high).contains(&calories) || title_has_any(recipe, &config.lunch_title_keywords)
        }
        MealType::Dinner => {
            let (low, high) = config.dinner_calorie_range;
            (low..=high).contains(&calories)
                && !has_egg(recipe, config)
                && !title_has_any(recipe, &config.breakfast_title_keywords)
        }
        MealType::Snack => calories < config.snack_max_calories,
    }
}

/// Bucket a corpus by meal-type suitability
#[must_use]
pub fn classify_by_meal_type(recipes: &[Recipe], config: &ClassifierConfig) -> MealBuckets {
    let mut buckets = MealBuckets::default();
    for recipe in recipes {
        for meal_type in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            if suits(recipe, meal_type, config) {
                buckets.bucket_mut(meal_type).push(recipe.clone());
            }
        }
    }
    buckets
}
