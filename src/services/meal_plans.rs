// ABOUTME: Store-backed meal plan workflows: generation with a premium refresh gate, swaps
// ABOUTME: Persists only AI recipes with unseen titles and remaps slots to existing recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::collections::HashMap;
use std::sync::Arc;

use sofra_core::models::{GroceryItem, MealPlan, MealType, MealsPerDay, Recipe, RecipeId};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::engine::{GeneratedPlan, MealPlanningEngine};
use crate::errors::{AppError, AppResult};
use crate::store::MealPlanStore;

/// Meal plan workflows over a store
pub struct MealPlanService {
    store: Arc<dyn MealPlanStore>,
    engine: Arc<MealPlanningEngine>,
}

impl MealPlanService {
    /// Create a service
    #[must_use]
    pub fn new(store: Arc<dyn MealPlanStore>, engine: Arc<MealPlanningEngine>) -> Self {
        Self { store, engine }
    }

    /// Generate and save a new plan for the owner
    ///
    /// Every call produces a new plan. `force_refresh` marks an explicit
    /// regeneration, which is a premium feature once the owner has any saved
    /// plan.
    ///
    /// # Errors
    ///
    /// - `RESOURCE_NOT_FOUND` when the owner has no profile
    /// - `PERMISSION_DENIED` for a forced refresh by a non-premium owner with a plan
    /// - engine errors (`INVALID_INPUT`, `NO_ELIGIBLE_RECIPES`)
    /// - `STORAGE_ERROR` from the store, unchanged
    #[instrument(skip(self), fields(owner_id = %owner_id))]
    pub async fn generate_for_owner(
        &self,
        owner_id: Uuid,
        meals: MealsPerDay,
        force_refresh: bool,
    ) -> AppResult<GeneratedPlan> {
        let profile = self
            .store
            .get_profile(owner_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Profile {owner_id}")))?;

        if force_refresh
            && !profile.is_premium
            && !self.store.list_plans(owner_id).await?.is_empty()
        {
            return Err(AppError::permission_denied(
                "Refreshing an existing meal plan requires a premium subscription",
            ));
        }

        let mut corpus = self.store.list_recipes().await?;
        let mut generated = self.engine.generate_plan(&profile, &corpus, meals).await?;

        if !generated.new_recipes.is_empty() {
            let (kept, remapped) = suppress_known_titles(&generated.new_recipes, &corpus);
            if !remapped.is_empty() {
                remap_slots(&mut generated.plan, &remapped);
                info!(
                    duplicates = remapped.len(),
                    "Reused existing recipes for generated titles"
                );
            }
            self.store.save_recipes(&kept).await?;
            corpus.extend(kept.iter().cloned());
            generated.new_recipes = kept;
        }

        match self.engine.validate_plan(&profile, &generated.plan, &corpus) {
            Ok(review) if !review.is_valid => {
                for issue in &review.issues {
                    warn!(plan_id = %generated.plan.id, issue = %issue, "Plan review issue");
                }
            }
            Ok(_) => {}
            Err(error) => warn!(error = %error, "Plan review skipped"),
        }

        self.store.save_plan(&generated.plan).await?;
        info!(
            plan_id = %generated.plan.id,
            source = %generated.source,
            "Saved meal plan"
        );
        Ok(generated)
    }

    /// Replace one slot of a stored plan and save it
    ///
    /// # Errors
    ///
    /// - `RESOURCE_NOT_FOUND` for an unknown plan or recipe
    /// - `VALUE_OUT_OF_RANGE` for a bad day index
    /// - `STORAGE_ERROR` from the store, unchanged
    #[instrument(skip(self), fields(plan_id = %plan_id))]
    pub async fn swap_meal(
        &self,
        plan_id: Uuid,
        day_index: usize,
        meal_type: MealType,
        replacement: &RecipeId,
    ) -> AppResult<MealPlan> {
        let plan = self.stored_plan(plan_id).await?;
        let corpus = self.store.list_recipes().await?;
        let updated = self
            .engine
            .swap_meal(&plan, day_index, meal_type, replacement, &corpus)?;
        self.store.save_plan(&updated).await?;
        Ok(updated)
    }

    /// Shopping list for a stored plan
    ///
    /// # Errors
    ///
    /// `RESOURCE_NOT_FOUND` for an unknown plan, `STORAGE_ERROR` from the store
    pub async fn grocery_list(&self, plan_id: Uuid) -> AppResult<Vec<GroceryItem>> {
        let plan = self.stored_plan(plan_id).await?;
        let corpus = self.store.list_recipes().await?;
        Ok(self.engine.aggregate_grocery_list(&plan, &corpus))
    }

    async fn stored_plan(&self, plan_id: Uuid) -> AppResult<MealPlan> {
        self.store
            .get_plan(plan_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Meal plan {plan_id}")))
    }
}

/// Split generated recipes into those to persist and a map from each
/// duplicate's id to the corpus recipe sharing its lower-cased title
fn suppress_known_titles(
    generated: &[Recipe],
    corpus: &[Recipe],
) -> (Vec<Recipe>, HashMap<RecipeId, RecipeId>) {
    let mut known: HashMap<String, &RecipeId> = HashMap::new();
    for recipe in corpus {
        known
            .entry(recipe.title.trim().to_lowercase())
            .or_insert(&recipe.id);
    }

    let mut kept = Vec::new();
    let mut remapped = HashMap::new();
    for recipe in generated {
        match known.get(&recipe.title.trim().to_lowercase()) {
            Some(&existing) => {
                remapped.insert(recipe.id.clone(), existing.clone());
            }
            None => kept.push(recipe.clone()),
        }
    }
    (kept, remapped)
}

fn remap_slots(plan: &mut MealPlan, remapped: &HashMap<RecipeId, RecipeId>) {
    for day in &mut plan.days {
        for recipe_id in day.meals.values_mut() {
            if let Some(existing) = remapped.get(recipe_id) {
                recipe_id.clone_from(existing);
            }
        }
    }
}
