// ABOUTME: Grocery command for sofra-cli
// ABOUTME: Prints the aggregated shopping list as JSON or as a text checklist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::path::Path;

use anyhow::Result;
use sofra::intelligence::render_shopping_list;
use sofra::models::{MealPlan, Recipe};

use crate::helpers::display::print_json;
use crate::helpers::files::{build_engine, read_json};

/// Aggregate and print the shopping list for a plan
pub async fn grocery(plan_path: &Path, recipes_path: &Path, text: bool) -> Result<()> {
    let plan: MealPlan = read_json(plan_path).await?;
    let corpus: Vec<Recipe> = read_json(recipes_path).await?;

    let items = build_engine(true)?.aggregate_grocery_list(&plan, &corpus);
    if text {
        print!(
            "{}",
            render_shopping_list(&items, plan.start_date, plan.end_date)
        );
        Ok(())
    } else {
        print_json(&items)
    }
}
