// ABOUTME: Grocery aggregation turning a meal plan into a categorized, quantity-summed shopping list
// ABOUTME: Keys ingredients by canonical name and unit, assigns categories from a keyword table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # Grocery Aggregator
//!
//! Walks every slot of every day, resolves the referenced recipe, and merges
//! its ingredient lines. Rows are keyed by `(canonical name, unit)`: the same
//! ingredient in two units yields two rows since no unit conversion is done.
//! Output order is first-occurrence order, which keeps the list stable for a
//! given plan.

use std::collections::HashMap;
use std::fmt::Write as _;

use chrono::NaiveDate;
use sofra_core::models::{GroceryCategory, GroceryItem, MealPlan, Recipe};
use tracing::debug;

use crate::corpus::RecipeIndex;

/// Keyword list for one grocery category
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Category assigned on match
    pub category: GroceryCategory,
    /// Lower-case substrings matched against the canonical name
    pub keywords: &'static [&'static str],
}

/// Category table, evaluated in order; the first matching category wins
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: GroceryCategory::Produce,
        keywords: &[
            "domates",
            "salatalık",
            "soğan",
            "havuç",
            "patates",
            "limon",
            "yeşil biber",
            "kırmızı soğan",
            "dereotu",
            "enginar",
        ],
    },
    CategoryRule {
        category: GroceryCategory::MeatPoultry,
        keywords: &["tavuk", "et", "balık"],
    },
    CategoryRule {
        category: GroceryCategory::Dairy,
        keywords: &["süt", "yoğurt", "peynir", "beyaz peynir", "yumurta"],
    },
    CategoryRule {
        category: GroceryCategory::LegumesGrains,
        keywords: &[
            "mercimek",
            "nohut",
            "fasulye",
            "bulgur",
            "pirinç",
            "kırmızı mercimek",
        ],
    },
    CategoryRule {
        category: GroceryCategory::OilsSauces,
        keywords: &["zeytinyağı", "tereyağı", "sirke"],
    },
    CategoryRule {
        category: GroceryCategory::Spices,
        keywords: &["tuz", "karabiber", "kimyon", "pul biber"],
    },
];

/// Trimmed, lower-cased ingredient name
#[must_use]
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Canonical name with its first character upper-cased
#[must_use]
pub fn display_name(canonical: &str) -> String {
    let mut chars = canonical.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Category for a canonical ingredient name
#[must_use]
pub fn categorize(canonical: &str) -> GroceryCategory {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| canonical.contains(keyword)))
        .map_or(GroceryCategory::Other, |rule| rule.category)
}

/// Merge every ingredient referenced by `plan` into shopping list rows
///
/// Slot ids that do not resolve in `recipes` are skipped. Quantities for the
/// same `(canonical name, unit)` are summed exactly.
#[must_use]
pub fn aggregate(plan: &MealPlan, recipes: &[Recipe]) -> Vec<GroceryItem> {
    let index = RecipeIndex::new(recipes);
    let mut items: Vec<GroceryItem> = Vec::new();
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut skipped = 0_usize;

    for recipe_id in plan.recipe_ids() {
        let Some(recipe) = index.get(recipe_id) else {
            skipped += 1;
            continue;
        };

        for ingredient in &recipe.ingredients {
            let canonical = canonical_name(&ingredient.name);
            let unit = ingredient.unit.trim().to_owned();
            let key = (canonical, unit);

            if let Some(&position) = positions.get(&key) {
                items[position].quantity += ingredient.quantity;
                continue;
            }

            let (canonical, unit) = key.clone();
            positions.insert(key, items.len());
            items.push(GroceryItem {
                name: display_name(&canonical),
                category: categorize(&canonical),
                canonical_name: canonical,
                quantity: ingredient.quantity,
                unit,
                checked: false,
            });
        }
    }

    debug!(
        plan_id = %plan.id,
        items = items.len(),
        skipped_recipes = skipped,
        "Aggregated grocery list"
    );
    items
}

/// Group rows by category in taxonomy order, omitting empty categories
#[must_use]
pub fn group_by_category(items: &[GroceryItem]) -> Vec<(GroceryCategory, Vec<&GroceryItem>)> {
    GroceryCategory::ALL
        .iter()
        .filter_map(|category| {
            let rows: Vec<&GroceryItem> = items
                .iter()
                .filter(|item| item.category == *category)
                .collect();
            (!rows.is_empty()).then_some((*category, rows))
        })
        .collect()
}

/// Format a quantity without trailing zeros (5 -> "5", 1.50 -> "1.5")
#[must_use]
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{quantity:.0}")
    } else {
        let text = format!("{quantity:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

/// Render a plain-text checklist grouped by category
#[must_use]
pub fn render_shopping_list(items: &[GroceryItem], start: NaiveDate, end: NaiveDate) -> String {
    let groups = group_by_category(items);
    let mut text = String::from("ALIŞVERİŞ LİSTESİ\n");
    let _ = writeln!(
        text,
        "{} - {}",
        start.format("%d.%m.%Y"),
        end.format("%d.%m.%Y")
    );
    let _ = writeln!(text, "\n{}\n", "=".repeat(30));

    for (category, rows) in &groups {
        let _ = writeln!(
            text,
            "{} ({} ürün)\n{}",
            category.as_str().to_uppercase(),
            rows.len(),
            "-".repeat(20)
        );
        for item in rows {
            let mark = if item.checked { '☑' } else { '☐' };
            let _ = writeln!(
                text,
                "{mark} {} - {} {}",
                item.name,
                format_quantity(item.quantity),
                item.unit
            );
        }
        text.push('\n');
    }

    let _ = write!(
        text,
        "ÖZET\nToplam {} ürün • {} kategori\n",
        items.len(),
        groups.len()
    );
    text
}
