// ABOUTME: Meal planning engine exposing targets, plan generation, validation, and grocery lists
// ABOUTME: Tries the AI generator first when configured and falls back to the rule-based assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # Meal Planning Engine
//!
//! Control flow for plan generation:
//!
//! 1. compute the daily energy target (profile errors surface immediately)
//! 2. if an AI generator is installed, run it with its retry loop
//! 3. on any AI failure, log it and assemble a plan from the recipe corpus
//!
//! Rule-based failures (`NO_ELIGIBLE_RECIPES`) are never retried or hidden.
//! The engine holds no per-request state and takes no locks.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sofra_core::models::{
    GroceryItem, MealPlan, MealType, MealsPerDay, PlanSource, Recipe, RecipeId, UserProfile,
};
use sofra_intelligence::{
    aggregate, assemble_plan, compute_targets, daily_energy_target, swap_candidates, swap_meal,
    validate, MealPlanningConfig, NutritionTargets, PlanValidation, SwapCriteria,
};
use tracing::{info, instrument, warn};

use crate::config::AiConfig;
use crate::errors::AppResult;
use crate::generation::{AiPlanGenerator, Clock, SystemClock};
use crate::llm::GeminiProvider;

/// A plan together with how it was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// The seven-day plan
    pub plan: MealPlan,
    /// Which generator produced it
    pub source: PlanSource,
    /// Recipes minted by the AI generator; empty for rule-based plans
    pub new_recipes: Vec<Recipe>,
    /// Terminal AI error that triggered the fallback, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// Entry point for every planning operation
pub struct MealPlanningEngine {
    config: MealPlanningConfig,
    ai: Option<AiPlanGenerator>,
    clock: Arc<dyn Clock>,
}

impl MealPlanningEngine {
    /// Create a rule-based engine
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if the algorithm tables fail validation
    pub fn new(config: MealPlanningConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ai: None,
            clock: Arc::new(SystemClock),
        })
    }

    /// Create an engine, installing the Gemini generator when `ai_config` has a usable key
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` for invalid algorithm tables, or `CONFIG_ERROR`
    /// if the HTTP client cannot be built
    pub fn from_ai_config(config: MealPlanningConfig, ai_config: AiConfig) -> AppResult<Self> {
        let engine = Self::new(config)?;
        if !ai_config.is_configured() {
            info!("AI generation not configured, using rule-based plans only");
            return Ok(engine);
        }
        let provider = GeminiProvider::from_config(&ai_config)?;
        info!(model = %ai_config.model, "AI generation enabled");
        Ok(engine.with_ai(AiPlanGenerator::new(Arc::new(provider), ai_config)))
    }

    /// Install an AI generator
    #[must_use]
    pub fn with_ai(mut self, generator: AiPlanGenerator) -> Self {
        self.ai = Some(generator);
        self
    }

    /// Replace the clock that dates new plans
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Algorithm configuration
    #[must_use]
    pub const fn config(&self) -> &MealPlanningConfig {
        &self.config
    }

    /// Whether plan generation tries the AI generator first
    #[must_use]
    pub const fn is_ai_enabled(&self) -> bool {
        self.ai.is_some()
    }

    /// BMR, TDEE, energy target and macro targets for a profile
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a non-positive weight or height, or for
    /// `Other` sex without a formula branch
    pub fn compute_targets(&self, profile: &UserProfile) -> AppResult<NutritionTargets> {
        compute_targets(profile, &self.config.nutrition)
    }

    /// Generate a plan starting today: AI first if configured, rule-based otherwise
    ///
    /// # Errors
    ///
    /// - `INVALID_INPUT` when the profile's energy target cannot be computed
    /// - `NO_ELIGIBLE_RECIPES` when the fallback cannot fill a slot
    #[instrument(skip_all, fields(owner_id = %profile.id, meals = meals.count()))]
    pub async fn generate_plan(
        &self,
        profile: &UserProfile,
        corpus: &[Recipe],
        meals: MealsPerDay,
    ) -> AppResult<GeneratedPlan> {
        let target_calories = daily_energy_target(profile, &self.config.nutrition)?;
        let start_date = self.clock.today();

        let fallback_reason = match &self.ai {
            Some(generator) => {
                match generator
                    .generate(profile, target_calories, meals, start_date)
                    .await
                {
                    Ok(generated) => {
                        info!(source = %PlanSource::Ai, "Meal plan ready");
                        return Ok(GeneratedPlan {
                            plan: generated.plan,
                            source: PlanSource::Ai,
                            new_recipes: generated.recipes,
                            fallback_reason: None,
                        });
                    }
                    Err(error) => {
                        warn!(
                            error = %error,
                            code = ?error.code,
                            "AI generation failed, falling back to rule-based assembly"
                        );
                        Some(error.to_string())
                    }
                }
            }
            None => None,
        };

        let plan = assemble_plan(profile, corpus, meals, start_date, &self.config)?;
        info!(source = %PlanSource::RuleBased, "Meal plan ready");
        Ok(GeneratedPlan {
            plan,
            source: PlanSource::RuleBased,
            new_recipes: Vec::new(),
            fallback_reason,
        })
    }

    /// Advisory review of a plan against the profile's targets
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when the profile's targets cannot be computed
    pub fn validate_plan(
        &self,
        profile: &UserProfile,
        plan: &MealPlan,
        corpus: &[Recipe],
    ) -> AppResult<PlanValidation> {
        validate(profile, plan, corpus, &self.config)
    }

    /// Shopping list for a plan
    #[must_use]
    pub fn aggregate_grocery_list(&self, plan: &MealPlan, corpus: &[Recipe]) -> Vec<GroceryItem> {
        aggregate(plan, corpus)
    }

    /// Copy of `plan` with one slot replaced
    ///
    /// # Errors
    ///
    /// `VALUE_OUT_OF_RANGE` for a bad day index, `RESOURCE_NOT_FOUND` for an
    /// unknown recipe
    pub fn swap_meal(
        &self,
        plan: &MealPlan,
        day_index: usize,
        meal_type: MealType,
        replacement: &RecipeId,
        corpus: &[Recipe],
    ) -> AppResult<MealPlan> {
        swap_meal(plan, day_index, meal_type, replacement, corpus)
    }

    /// Replacement candidates for a slot
    #[must_use]
    pub fn swap_candidates<'a>(
        &self,
        corpus: &'a [Recipe],
        current: &RecipeId,
        criteria: &SwapCriteria,
    ) -> Vec<&'a Recipe> {
        swap_candidates(corpus, current, criteria)
    }
}
