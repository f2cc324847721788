// ABOUTME: Domain models for profiles, recipes, meal plans, and grocery lists
// ABOUTME: Plain serde data types shared by every crate in the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

/// Shopping list rows and category taxonomy
pub mod grocery;
/// Weekly plan structure
pub mod meal_plan;
/// User profile and dietary tags
pub mod profile;
/// Recipe corpus entries
pub mod recipe;

pub use grocery::{GroceryCategory, GroceryItem};
pub use meal_plan::{DailyMealSlot, MealPlan, MealType, MealsPerDay, PlanSource};
pub use profile::{ActivityLevel, BiologicalSex, DietaryTag, PrimaryGoal, SexFormula, UserProfile};
pub use recipe::{Ingredient, Recipe, RecipeId};
