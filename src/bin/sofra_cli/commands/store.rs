// ABOUTME: Store-backed commands for sofra-cli: plan generation and meal swap
// ABOUTME: Runs the meal plan service over a JSON snapshot file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use sofra::models::{MealType, MealsPerDay, RecipeId};
use sofra::services::MealPlanService;
use sofra::store::JsonFileStore;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::print_json;
use crate::helpers::files::build_engine;

fn service(store_path: PathBuf) -> Result<MealPlanService> {
    let store = Arc::new(JsonFileStore::new(store_path));
    Ok(MealPlanService::new(store, Arc::new(build_engine(false)?)))
}

/// Generate and save a new plan for the owner
pub async fn generate(store_path: PathBuf, owner: Uuid, meals: u8, force: bool) -> Result<()> {
    let meals = MealsPerDay::try_from(meals)?;
    let generated = service(store_path)?
        .generate_for_owner(owner, meals, force)
        .await?;
    info!(
        plan_id = %generated.plan.id,
        source = %generated.source,
        new_recipes = generated.new_recipes.len(),
        "Generated new plan"
    );
    print_json(&generated.plan)
}

/// Replace one meal of a stored plan
pub async fn swap(
    store_path: PathBuf,
    plan_id: Uuid,
    day: usize,
    meal: &str,
    recipe: String,
) -> Result<()> {
    let meal_type = MealType::parse(meal)?;
    let updated = service(store_path)?
        .swap_meal(plan_id, day, meal_type, &RecipeId::new(recipe))
        .await?;
    print_json(&updated)
}
