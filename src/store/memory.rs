// ABOUTME: In-memory meal plan store guarded by a tokio RwLock
// ABOUTME: Used by tests and as the default backend for one-shot CLI runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use async_trait::async_trait;
use sofra_core::models::{MealPlan, Recipe, UserProfile};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{MealPlanStore, StoreSnapshot};
use crate::errors::AppResult;

/// Process-local store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreSnapshot>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `snapshot`
    #[must_use]
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl MealPlanStore for InMemoryStore {
    async fn get_profile(&self, owner_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.state.read().await.profile(owner_id))
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> AppResult<()> {
        self.state.write().await.upsert_profile(profile);
        Ok(())
    }

    async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.state.read().await.recipes.clone())
    }

    async fn save_recipes(&self, recipes: &[Recipe]) -> AppResult<()> {
        let added = self.state.write().await.append_recipes(recipes);
        debug!(added, "Saved recipes");
        Ok(())
    }

    async fn list_plans(&self, owner_id: Uuid) -> AppResult<Vec<MealPlan>> {
        Ok(self.state.read().await.plans_for(owner_id))
    }

    async fn get_plan(&self, plan_id: Uuid) -> AppResult<Option<MealPlan>> {
        Ok(self.state.read().await.plan(plan_id))
    }

    async fn save_plan(&self, plan: &MealPlan) -> AppResult<()> {
        self.state.write().await.upsert_plan(plan);
        debug!(plan_id = %plan.id, "Saved plan");
        Ok(())
    }
}
