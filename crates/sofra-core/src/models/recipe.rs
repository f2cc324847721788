// ABOUTME: Recipe model shared by the rule-based assembler and the AI generator
// ABOUTME: Defines RecipeId, Recipe, and Ingredient with their nutrition fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable recipe identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wrap an identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name as written in the recipe (e.g., "Domates")
    pub name: String,
    /// Quantity, always positive
    pub quantity: f64,
    /// Free-text unit (e.g., "adet", "g", "su bardağı")
    pub unit: String,
}

impl Ingredient {
    /// Create an ingredient line
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// A recipe from the corpus. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier
    pub id: RecipeId,
    /// Title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Cuisine tag (e.g., "Turkish")
    #[serde(default)]
    pub cuisine: String,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_minutes: u32,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_minutes: u32,
    /// Energy per serving (kcal)
    pub calories: u32,
    /// Protein per serving (g)
    pub protein_g: f64,
    /// Carbohydrates per serving (g)
    pub carbs_g: f64,
    /// Fat per serving (g)
    pub fat_g: f64,
    /// Ordered ingredient lines
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Ordered instruction steps
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Total hands-on plus cooking time
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        self.prep_minutes.saturating_add(self.cook_minutes)
    }

    /// Whether any ingredient name contains `keyword` (case-insensitive)
    #[must_use]
    pub fn has_ingredient_matching(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase().contains(&keyword))
    }

    /// Whether the title contains `keyword` (case-insensitive)
    #[must_use]
    pub fn title_contains(&self, keyword: &str) -> bool {
        self.title.to_lowercase().contains(&keyword.to_lowercase())
    }
}
