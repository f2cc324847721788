// ABOUTME: User profile model carrying the physiological inputs for nutrition targets
// ABOUTME: Defines UserProfile, BiologicalSex, ActivityLevel, PrimaryGoal, and DietaryTag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Biological sex as recorded on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male
    Male,
    /// Female
    Female,
    /// Other; requires an explicit [`SexFormula`] on the profile
    Other,
}

/// Which Mifflin-St Jeor constant to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SexFormula {
    /// +5 kcal constant
    Male,
    /// -161 kcal constant
    Female,
}

/// Self-reported activity level used for the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
}

/// Primary body-composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    /// Caloric deficit
    LoseWeight,
    /// Caloric balance
    MaintainWeight,
    /// Caloric surplus
    GainMuscle,
}

/// Dietary constraint that excludes recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DietaryTag {
    /// No meat, poultry or fish
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    /// No animal products
    #[serde(rename = "Vegan")]
    Vegan,
    /// No wheat-derived ingredients
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    /// No dairy
    #[serde(rename = "Lactose-Intolerant")]
    LactoseIntolerant,
    /// No tree nuts or seeds
    #[serde(rename = "Nut-Allergy")]
    NutAllergy,
    /// At most 30 g carbohydrates per recipe
    #[serde(rename = "Low-Carb")]
    LowCarb,
    /// Accepted but not enforced; recipes carry no sodium data
    #[serde(rename = "Low-Sodium")]
    LowSodium,
    /// At most 25 g carbohydrates per recipe
    #[serde(rename = "Diabetic")]
    Diabetic,
}

impl DietaryTag {
    /// Display label, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::GlutenFree => "Gluten-Free",
            Self::LactoseIntolerant => "Lactose-Intolerant",
            Self::NutAllergy => "Nut-Allergy",
            Self::LowCarb => "Low-Carb",
            Self::LowSodium => "Low-Sodium",
            Self::Diabetic => "Diabetic",
        }
    }

    /// Parse a label case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for an unknown label
    pub fn parse(label: &str) -> AppResult<Self> {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "gluten-free" | "gluten_free" => Ok(Self::GlutenFree),
            "lactose-intolerant" | "lactose_intolerant" => Ok(Self::LactoseIntolerant),
            "nut-allergy" | "nut_allergy" => Ok(Self::NutAllergy),
            "low-carb" | "low_carb" => Ok(Self::LowCarb),
            "low-sodium" | "low_sodium" => Ok(Self::LowSodium),
            "diabetic" => Ok(Self::Diabetic),
            _ => Err(AppError::invalid_input(format!(
                "Unknown dietary tag: {label}"
            ))),
        }
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile supplied with every planning request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owner of the plans generated from this profile
    pub id: Uuid,
    /// Display name, only used in the AI prompt
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: BiologicalSex,
    /// Explicit formula branch; mandatory when `sex` is `Other`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula_branch: Option<SexFormula>,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Primary goal
    pub goal: PrimaryGoal,
    /// Dietary constraints, may be empty
    #[serde(default)]
    pub dietary_preferences: BTreeSet<DietaryTag>,
    /// Premium subscription flag
    #[serde(default)]
    pub is_premium: bool,
}

impl UserProfile {
    /// Resolve which Mifflin-St Jeor constant applies to this profile
    ///
    /// An explicit `formula_branch` always wins.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when `sex` is `Other` and no branch was chosen
    pub fn sex_formula(&self) -> AppResult<SexFormula> {
        match (self.formula_branch, self.sex) {
            (Some(branch), _) => Ok(branch),
            (None, BiologicalSex::Male) => Ok(SexFormula::Male),
            (None, BiologicalSex::Female) => Ok(SexFormula::Female),
            (None, BiologicalSex::Other) => Err(AppError::invalid_input(
                "Profile with sex 'other' must select a formula branch (male or female)",
            )),
        }
    }

    /// Whether the profile carries the given dietary tag
    #[must_use]
    pub fn has_tag(&self, tag: DietaryTag) -> bool {
        self.dietary_preferences.contains(&tag)
    }
}
