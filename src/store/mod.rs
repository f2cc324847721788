// ABOUTME: Storage abstraction for profiles, the recipe corpus, and saved meal plans
// ABOUTME: Async trait implemented by an in-memory store and a JSON file store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # Meal Plan Store
//!
//! The engine never talks to storage itself; the store-backed workflows in
//! [`crate::services`] do. Saving a plan is an upsert keyed by plan id and
//! concurrent writers are not coordinated: the last write wins.

/// JSON snapshot file backend
pub mod json_file;
/// Process-local backend
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sofra_core::models::{MealPlan, Recipe, UserProfile};
use uuid::Uuid;

use crate::errors::AppResult;

/// Core storage abstraction
///
/// Write failures are reported as `STORAGE_ERROR` and callers propagate them
/// unchanged.
#[async_trait]
pub trait MealPlanStore: Send + Sync {
    // ================================
    // Profiles
    // ================================

    /// Get a profile by owner id
    async fn get_profile(&self, owner_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Insert or replace a profile
    async fn upsert_profile(&self, profile: &UserProfile) -> AppResult<()>;

    // ================================
    // Recipes
    // ================================

    /// The full recipe corpus in insertion order
    async fn list_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// Append recipes to the corpus, skipping ids that already exist
    async fn save_recipes(&self, recipes: &[Recipe]) -> AppResult<()>;

    // ================================
    // Plans
    // ================================

    /// Plans of an owner, newest first
    async fn list_plans(&self, owner_id: Uuid) -> AppResult<Vec<MealPlan>>;

    /// Get a plan by id
    async fn get_plan(&self, plan_id: Uuid) -> AppResult<Option<MealPlan>>;

    /// Insert or replace a plan
    async fn save_plan(&self, plan: &MealPlan) -> AppResult<()>;
}

/// Complete store contents, shared by both backends
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Profiles
    #[serde(default)]
    pub profiles: Vec<UserProfile>,
    /// Recipe corpus
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Saved plans
    #[serde(default)]
    pub plans: Vec<MealPlan>,
}

impl StoreSnapshot {
    fn profile(&self, owner_id: Uuid) -> Option<UserProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.id == owner_id)
            .cloned()
    }

    fn upsert_profile(&mut self, profile: &UserProfile) {
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => self.profiles.push(profile.clone()),
        }
    }

    fn append_recipes(&mut self, recipes: &[Recipe]) -> usize {
        let mut added = 0;
        for recipe in recipes {
            if !self.recipes.iter().any(|r| r.id == recipe.id) {
                self.recipes.push(recipe.clone());
                added += 1;
            }
        }
        added
    }

    fn plans_for(&self, owner_id: Uuid) -> Vec<MealPlan> {
        let mut plans: Vec<MealPlan> = self
            .plans
            .iter()
            .filter(|plan| plan.owner_id == owner_id)
            .cloned()
            .collect();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        plans
    }

    fn plan(&self, plan_id: Uuid) -> Option<MealPlan> {
        self.plans.iter().find(|plan| plan.id == plan_id).cloned()
    }

    fn upsert_plan(&mut self, plan: &MealPlan) {
        match self.plans.iter_mut().find(|p| p.id == plan.id) {
            Some(existing) => *existing = plan.clone(),
            None => self.plans.push(plan.clone()),
        }
    }
}
