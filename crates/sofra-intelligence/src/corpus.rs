// ABOUTME: Read-only recipe lookup by id over a borrowed corpus slice
// ABOUTME: Shared by plan validation, grocery aggregation, and meal swapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::collections::HashMap;

use sofra_core::models::{Recipe, RecipeId};

/// Borrowed id -> recipe index
///
/// When ids repeat in the corpus the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct RecipeIndex<'a> {
    by_id: HashMap<&'a RecipeId, &'a Recipe>,
}

impl<'a> RecipeIndex<'a> {
    /// Index a corpus
    #[must_use]
    pub fn new(recipes: &'a [Recipe]) -> Self {
        let mut by_id = HashMap::with_capacity(recipes.len());
        for recipe in recipes {
            by_id.entry(&recipe.id).or_insert(recipe);
        }
        Self { by_id }
    }

    /// Look up a recipe
    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&'a Recipe> {
        self.by_id.get(id).copied()
    }

    /// Whether the corpus contains `id`
    #[must_use]
    pub fn contains(&self, id: &RecipeId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
