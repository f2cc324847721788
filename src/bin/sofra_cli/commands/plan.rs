// ABOUTME: File-based planning commands for sofra-cli: targets, plan, and validate
// ABOUTME: Reads profile, recipe, and plan JSON files and prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::path::Path;

use anyhow::Result;
use sofra::models::{MealPlan, MealsPerDay, Recipe, UserProfile};
use tracing::info;

use crate::helpers::display::print_json;
use crate::helpers::files::{build_engine, read_json};

/// Print the nutrition target bundle for a profile
pub async fn targets(profile_path: &Path) -> Result<()> {
    let profile: UserProfile = read_json(profile_path).await?;
    let engine = build_engine(true)?;
    print_json(&engine.compute_targets(&profile)?)
}

/// Generate a plan from a profile and a recipe corpus
pub async fn plan(profile_path: &Path, recipes_path: &Path, meals: u8, no_ai: bool) -> Result<()> {
    let profile: UserProfile = read_json(profile_path).await?;
    let corpus: Vec<Recipe> = read_json(recipes_path).await?;
    let meals = MealsPerDay::try_from(meals)?;

    let engine = build_engine(no_ai)?;
    info!(
        recipes = corpus.len(),
        ai_enabled = engine.is_ai_enabled(),
        "Generating meal plan"
    );
    let generated = engine.generate_plan(&profile, &corpus, meals).await?;
    print_json(&generated)
}

/// Review a plan against a profile
pub async fn validate(profile_path: &Path, plan_path: &Path, recipes_path: &Path) -> Result<()> {
    let profile: UserProfile = read_json(profile_path).await?;
    let plan: MealPlan = read_json(plan_path).await?;
    let corpus: Vec<Recipe> = read_json(recipes_path).await?;

    let engine = build_engine(true)?;
    print_json(&engine.validate_plan(&profile, &plan, &corpus)?)
}
