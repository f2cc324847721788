// ABOUTME: Meal plan store persisted as one JSON snapshot file on disk
// ABOUTME: Reads the file per call and rewrites it through a temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sofra_core::models::{MealPlan, Recipe, UserProfile};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use super::{MealPlanStore, StoreSnapshot};
use crate::errors::{AppError, AppResult};

/// Store backed by a JSON file
///
/// A missing file reads as an empty store. Writes within one process are
/// serialized; separate processes are not coordinated.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store at `path`; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// File backing this store
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole snapshot
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read or decoded
    pub async fn load(&self) -> AppResult<StoreSnapshot> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::storage(format!(
                    "Failed to decode store file {}: {e}",
                    self.path.display()
                ))
                .with_source(e)
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(StoreSnapshot::default()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read store file {}: {e}",
                self.path.display()
            ))
            .with_source(e)),
        }
    }

    async fn persist(&self, snapshot: &StoreSnapshot) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, bytes).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to write store file {}: {e}",
                temp_path.display()
            ))
            .with_source(e)
        })?;
        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to replace store file {}: {e}",
                self.path.display()
            ))
            .with_source(e)
        })
    }

    async fn update(&self, apply: impl FnOnce(&mut StoreSnapshot) + Send) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.load().await?;
        apply(&mut snapshot);
        self.persist(&snapshot).await
    }
}

#[async_trait]
impl MealPlanStore for JsonFileStore {
    async fn get_profile(&self, owner_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.load().await?.profile(owner_id))
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> AppResult<()> {
        self.update(|snapshot| snapshot.upsert_profile(profile)).await
    }

    async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.load().await?.recipes)
    }

    async fn save_recipes(&self, recipes: &[Recipe]) -> AppResult<()> {
        self.update(|snapshot| {
            let added = snapshot.append_recipes(recipes);
            debug!(added, "Saved recipes");
        })
        .await
    }

    async fn list_plans(&self, owner_id: Uuid) -> AppResult<Vec<MealPlan>> {
        Ok(self.load().await?.plans_for(owner_id))
    }

    async fn get_plan(&self, plan_id: Uuid) -> AppResult<Option<MealPlan>> {
        Ok(self.load().await?.plan(plan_id))
    }

    async fn save_plan(&self, plan: &MealPlan) -> AppResult<()> {
        self.update(|snapshot| snapshot.upsert_plan(plan)).await
    }
}
