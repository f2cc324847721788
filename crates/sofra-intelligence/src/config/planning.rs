// ABOUTME: Plan assembly configuration: meal-type classifier rules, slot ratios, validation tolerances
// ABOUTME: Fixed defaults mirror the product's published meal structure and review thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use serde::{Deserialize, Serialize};
use sofra_core::models::MealsPerDay;

use super::error::ConfigError;

/// Meal-type classification rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Breakfast when calories are strictly below this
    pub breakfast_max_calories: u32,
    /// Lunch calorie window, inclusive
    pub lunch_calorie_range: (u32, u32),
    /// Dinner calorie window, inclusive
    pub dinner_calorie_range: (u32, u32),
    /// Snack when calories are strictly below this
    pub snack_max_calories: u32,
    /// Ingredient keywords marking an egg dish
    pub egg_keywords: Vec<String>,
    /// Title keywords marking a breakfast-style dish
    pub breakfast_title_keywords: Vec<String>,
    /// Title keywords marking a lunch-style dish
    pub lunch_title_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            breakfast_max_calories: 400,
            lunch_calorie_range: (300, 600),
            dinner_calorie_range: (400, 700),
            snack_max_calories: 250,
            egg_keywords: vec!["yumurta".to_owned()],
            breakfast_title_keywords: vec!["smoothie".to_owned(), "bowl".to_owned()],
            lunch_title_keywords: vec![
                "salata".to_owned(),
                "salad".to_owned(),
                "çorba".to_owned(),
                "soup".to_owned(),
            ],
        }
    }
}

/// Share of the daily energy target assigned to each slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRatioConfig {
    /// Breakfast, lunch, dinner
    pub three_meals: [f64; 3],
    /// Breakfast, lunch, dinner, snack
    pub four_meals: [f64; 4],
}

impl SlotRatioConfig {
    /// Shares aligned with [`MealsPerDay::slots`]
    #[must_use]
    pub fn shares(&self, meals: MealsPerDay) -> &[f64] {
        match meals {
            MealsPerDay::Three => &self.three_meals,
            MealsPerDay::Four => &self.four_meals,
        }
    }
}

impl Default for SlotRatioConfig {
    fn default() -> Self {
        Self {
            three_meals: [0.25, 0.35, 0.40],
            four_meals: [0.25, 0.30, 0.30, 0.15],
        }
    }
}

/// Tolerances for the advisory plan review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Relative calorie deviation tolerated (0.15 = 15 %)
    pub calorie_tolerance: f64,
    /// Relative protein deviation tolerated (0.20 = 20 %)
    pub protein_tolerance: f64,
    /// Average daily calories below this are flagged
    pub minimum_daily_calories: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            calorie_tolerance: 0.15,
            protein_tolerance: 0.20,
            minimum_daily_calories: 1200.0,
        }
    }
}

/// Everything the rule-based planner needs besides nutrition targets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Meal-type classifier rules
    pub classifier: ClassifierConfig,
    /// Slot energy shares
    pub slot_ratios: SlotRatioConfig,
    /// Plan review tolerances
    pub validation: ValidationConfig,
}

impl PlanningConfig {
    /// Validate windows, shares and tolerances
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a calorie window is inverted, slot shares do
    /// not sum to 1.0, or a tolerance is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let classifier = &self.classifier;
        if classifier.lunch_calorie_range.0 > classifier.lunch_calorie_range.1 {
            return Err(ConfigError::InvalidRange("lunch calorie range"));
        }
        if classifier.dinner_calorie_range.0 > classifier.dinner_calorie_range.1 {
            return Err(ConfigError::InvalidRange("dinner calorie range"));
        }

        for (shares, name) in [
            (&self.slot_ratios.three_meals[..], "three-meal slot ratios"),
            (&self.slot_ratios.four_meals[..], "four-meal slot ratios"),
        ] {
            if shares.iter().any(|share| *share < 0.0) {
                return Err(ConfigError::ValueOutOfRange(name));
            }
            if (shares.iter().sum::<f64>() - 1.0).abs() > 1e-6 {
                return Err(ConfigError::InvalidRatios(name));
            }
        }

        let validation = &self.validation;
        if validation.calorie_tolerance < 0.0 || validation.protein_tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "validation tolerances must not be negative",
            ));
        }
        Ok(())
    }
}
