// ABOUTME: Dietary constraint filter excluding recipes that violate a profile's dietary tags
// ABOUTME: Table-driven: each tag maps to one exclusion predicate over ingredients or macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # Dietary Filter
//!
//! Each [`DietaryTag`] maps to at most one exclusion predicate in
//! [`DIETARY_RULES`]. A recipe is kept only if no active tag's predicate fires.
//! Ingredient checks are case-insensitive substring matches on ingredient
//! names, so "et" also matches "Etli" and similar words. That is deliberate
//! plain-text matching, not ingredient ontology.

use std::collections::BTreeSet;

use sofra_core::models::{DietaryTag, Recipe};

/// Meat, poultry and fish keywords
pub const MEAT_KEYWORDS: &[&str] = &["tavuk", "et", "balık", "hindi", "kuzu", "dana"];

/// Dairy, egg and honey keywords added on top of [`MEAT_KEYWORDS`] for vegans
pub const ANIMAL_PRODUCT_KEYWORDS: &[&str] =
    &["süt", "peynir", "yumurta", "yoğurt", "tereyağı", "bal"];

/// Wheat-derived ingredient keywords
pub const GLUTEN_KEYWORDS: &[&str] = &["bulgur", "un", "makarna", "ekmek", "buğday"];

/// Dairy keywords
pub const LACTOSE_KEYWORDS: &[&str] = &["süt", "peynir", "yoğurt", "tereyağı", "krema"];

/// Tree nut and seed keywords
pub const NUT_KEYWORDS: &[&str] = &["ceviz", "badem", "fındık", "fıstık", "chia", "susam"];

/// Carbohydrate ceiling (g) for low-carb recipes
pub const LOW_CARB_MAX_CARBS_G: f64 = 30.0;

/// Carbohydrate ceiling (g) for diabetic-friendly recipes
pub const DIABETIC_MAX_CARBS_G: f64 = 25.0;

/// One dietary tag and the predicate that excludes a recipe under it
#[derive(Debug, Clone, Copy)]
pub struct DietaryRule {
    /// Tag this rule enforces
    pub tag: DietaryTag,
    /// Returns `true` when the recipe must be excluded
    pub excludes: fn(&Recipe) -> bool,
}

/// Exclusion rules. `LowSodium` has no entry: recipes carry no sodium data.
pub const DIETARY_RULES: &[DietaryRule] = &[
    DietaryRule {
        tag: DietaryTag::Vegetarian,
        excludes: has_meat,
    },
    DietaryRule {
        tag: DietaryTag::Vegan,
        excludes: has_animal_product,
    },
    DietaryRule {
        tag: DietaryTag::GlutenFree,
        excludes: has_gluten,
    },
    DietaryRule {
        tag: DietaryTag::LactoseIntolerant,
        excludes: has_lactose,
    },
    DietaryRule {
        tag: DietaryTag::NutAllergy,
        excludes: has_nuts,
    },
    DietaryRule {
        tag: DietaryTag::LowCarb,
        excludes: exceeds_low_carb,
    },
    DietaryRule {
        tag: DietaryTag::Diabetic,
        excludes: exceeds_diabetic_carbs,
    },
];

fn contains_any(recipe: &Recipe, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| recipe.has_ingredient_matching(keyword))
}

fn has_meat(recipe: &Recipe) -> bool {
    contains_any(recipe, MEAT_KEYWORDS)
}

fn has_animal_product(recipe: &Recipe) -> bool {
    has_meat(recipe) || contains_any(recipe, ANIMAL_PRODUCT_KEYWORDS)
}

fn has_gluten(recipe: &Recipe) -> bool {
    contains_any(recipe, GLUTEN_KEYWORDS)
}

fn has_lactose(recipe: &Recipe) -> bool {
    contains_any(recipe, LACTOSE_KEYWORDS)
}

fn has_nuts(recipe: &Recipe) -> bool {
    contains_any(recipe, NUT_KEYWORDS)
}

fn exceeds_low_carb(recipe: &Recipe) -> bool {
    recipe.carbs_g > LOW_CARB_MAX_CARBS_G
}

fn exceeds_diabetic_carbs(recipe: &Recipe) -> bool {
    recipe.carbs_g > DIABETIC_MAX_CARBS_G
}

/// Whether `recipe` violates `tag`
#[must_use]
pub fn violates(recipe: &Recipe, tag: DietaryTag) -> bool {
    DIETARY_RULES
        .iter()
        .filter(|rule| rule.tag == tag)
        .any(|rule| (rule.excludes)(recipe))
}

/// Whether `recipe` passes every tag in `tags`
#[must_use]
pub fn is_allowed(recipe: &Recipe, tags: &BTreeSet<DietaryTag>) -> bool {
    tags.iter().all(|tag| !violates(recipe, *tag))
}

/// Keep the recipes that pass every active dietary tag
///
/// Returns a new collection in corpus order; the input is not modified. With
/// no tags the whole corpus is returned. Applying the filter twice yields the
/// same result as applying it once.
#[must_use]
pub fn filter_by_diet(recipes: &[Recipe], tags: &BTreeSet<DietaryTag>) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| is_allowed(recipe, tags))
        .cloned()
        .collect()
}
