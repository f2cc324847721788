// ABOUTME: Shopping list model produced by grocery aggregation
// ABOUTME: Defines GroceryCategory taxonomy and GroceryItem rows keyed by name and unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed grocery category taxonomy, in shopping-list order
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GroceryCategory {
    /// Vegetables and fruit
    #[serde(rename = "Sebze & Meyve")]
    Produce,
    /// Meat, poultry and fish
    #[serde(rename = "Et & Tavuk")]
    MeatPoultry,
    /// Dairy and eggs
    #[serde(rename = "Süt Ürünleri")]
    Dairy,
    /// Legumes and grains
    #[serde(rename = "Bakliyat & Tahıllar")]
    LegumesGrains,
    /// Oils, fats and sauces
    #[serde(rename = "Yağlar & Soslar")]
    OilsSauces,
    /// Spices and seasoning
    #[serde(rename = "Baharatlar")]
    Spices,
    /// Anything unmatched
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl GroceryCategory {
    /// All categories in display order
    pub const ALL: [Self; 7] = [
        Self::Produce,
        Self::MeatPoultry,
        Self::Dairy,
        Self::LegumesGrains,
        Self::OilsSauces,
        Self::Spices,
        Self::Other,
    ];

    /// Category label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "Sebze & Meyve",
            Self::MeatPoultry => "Et & Tavuk",
            Self::Dairy => "Süt Ürünleri",
            Self::LegumesGrains => "Bakliyat & Tahıllar",
            Self::OilsSauces => "Yağlar & Soslar",
            Self::Spices => "Baharatlar",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Display name: canonical name with the first letter upper-cased
    pub name: String,
    /// Trimmed, lower-cased ingredient name used for aggregation
    pub canonical_name: String,
    /// Summed quantity
    pub quantity: f64,
    /// Unit shared by every aggregated occurrence
    pub unit: String,
    /// Category from the keyword table
    pub category: GroceryCategory,
    /// Owned by the consumer; always `false` when produced
    #[serde(default)]
    pub checked: bool,
}
