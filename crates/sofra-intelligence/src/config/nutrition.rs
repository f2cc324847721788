// ABOUTME: Nutrition target configuration: Mifflin-St Jeor coefficients and goal tables
// ABOUTME: Activity multipliers, goal calorie adjustments, and per-goal macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! Nutrition Target Configuration
//!
//! Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//! energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.

use serde::{Deserialize, Serialize};
use sofra_core::models::{ActivityLevel, PrimaryGoal};

use super::error::ConfigError;

/// Complete nutrition target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionTargetConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Daily calorie adjustment per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Macro split per goal
    pub macro_ratios: MacroRatioConfig,
    /// Energy density of each macronutrient
    pub energy_density: EnergyDensityConfig,
}

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
        }
    }
}

/// Daily kcal adjustment applied to TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Lose weight: -500
    pub lose_weight_kcal: f64,
    /// Maintain: 0
    pub maintain_weight_kcal: f64,
    /// Gain muscle: +300
    pub gain_muscle_kcal: f64,
}

impl GoalAdjustmentConfig {
    /// Adjustment for a goal
    #[must_use]
    pub const fn adjustment_for(&self, goal: PrimaryGoal) -> f64 {
        match goal {
            PrimaryGoal::LoseWeight => self.lose_weight_kcal,
            PrimaryGoal::MaintainWeight => self.maintain_weight_kcal,
            PrimaryGoal::GainMuscle => self.gain_muscle_kcal,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_weight_kcal: -500.0,
            maintain_weight_kcal: 0.0,
            gain_muscle_kcal: 300.0,
        }
    }
}

/// Fractions of total energy from protein, carbohydrate and fat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Protein share
    pub protein: f64,
    /// Carbohydrate share
    pub carbs: f64,
    /// Fat share
    pub fat: f64,
}

impl MacroRatio {
    /// Build a ratio triple
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let parts = [self.protein, self.carbs, self.fat];
        if parts.iter().any(|part| !(0.0..=1.0).contains(part)) {
            return Err(ConfigError::ValueOutOfRange(name));
        }
        if (parts.iter().sum::<f64>() - 1.0).abs() > 1e-6 {
            return Err(ConfigError::InvalidRatios(name));
        }
        Ok(())
    }
}

/// Macro split per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatioConfig {
    /// Lose weight: 35/35/30
    pub lose_weight: MacroRatio,
    /// Maintain: 25/45/30
    pub maintain_weight: MacroRatio,
    /// Gain muscle: 30/45/25
    pub gain_muscle: MacroRatio,
}

impl MacroRatioConfig {
    /// Ratio triple for a goal
    #[must_use]
    pub const fn ratio_for(&self, goal: PrimaryGoal) -> MacroRatio {
        match goal {
            PrimaryGoal::LoseWeight => self.lose_weight,
            PrimaryGoal::MaintainWeight => self.maintain_weight,
            PrimaryGoal::GainMuscle => self.gain_muscle,
        }
    }
}

impl Default for MacroRatioConfig {
    fn default() -> Self {
        Self {
            lose_weight: MacroRatio::new(0.35, 0.35, 0.30),
            maintain_weight: MacroRatio::new(0.25, 0.45, 0.30),
            gain_muscle: MacroRatio::new(0.30, 0.45, 0.25),
        }
    }
}

/// kcal per gram of each macronutrient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyDensityConfig {
    /// Protein: 4 kcal/g
    pub protein_kcal_per_g: f64,
    /// Carbohydrate: 4 kcal/g
    pub carbs_kcal_per_g: f64,
    /// Fat: 9 kcal/g
    pub fat_kcal_per_g: f64,
}

impl Default for EnergyDensityConfig {
    fn default() -> Self {
        Self {
            protein_kcal_per_g: 4.0,
            carbs_kcal_per_g: 4.0,
            fat_kcal_per_g: 9.0,
        }
    }
}

impl NutritionTargetConfig {
    /// Validate coefficient ranges and ratio sums
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a multiplier is not positive or a ratio triple
    /// does not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        if [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
        ]
        .iter()
        .any(|factor| *factor <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be positive",
            ));
        }

        let density = &self.energy_density;
        if density.protein_kcal_per_g <= 0.0
            || density.carbs_kcal_per_g <= 0.0
            || density.fat_kcal_per_g <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "energy densities must be positive",
            ));
        }

        self.macro_ratios
            .lose_weight
            .validate("lose_weight macro ratios")?;
        self.macro_ratios
            .maintain_weight
            .validate("maintain_weight macro ratios")?;
        self.macro_ratios
            .gain_muscle
            .validate("gain_muscle macro ratios")
    }
}
