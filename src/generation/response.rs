// ABOUTME: Parser for AI meal plan payloads: fence stripping, JSON decoding, structural checks
// ABOUTME: Converts a validated payload into dated day slots and freshly identified recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # AI Response Parsing
//!
//! The payload is a seven-element `days` array; each day maps the Turkish slot
//! keys (`kahvalti`, `ogle_yemegi`, `aksam_yemegi`, `ara_ogun`) to a full
//! recipe record. Parsing is all-or-nothing: any deviation rejects the whole
//! payload so that no partial plan is ever accepted.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use sofra_core::constants::plan::PLAN_LENGTH_DAYS;
use sofra_core::models::{
    DailyMealSlot, Ingredient, MealPlan, MealType, MealsPerDay, Recipe, RecipeId,
};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Prefix of identifiers minted for generated recipes
pub const AI_RECIPE_ID_PREFIX: &str = "ai-";

#[derive(Debug, Deserialize)]
struct AiMealPlanPayload {
    days: Vec<AiDay>,
}

#[derive(Debug, Deserialize)]
struct AiDay {
    #[serde(default)]
    day: String,
    meals: AiMeals,
}

#[derive(Debug, Deserialize)]
struct AiMeals {
    kahvalti: AiRecipe,
    ogle_yemegi: AiRecipe,
    aksam_yemegi: AiRecipe,
    // Decoded only when a snack was requested
    #[serde(default)]
    ara_ogun: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct AiRecipe {
    name: String,
    description: String,
    cuisine_type: String,
    prep_time_minutes: f64,
    cook_time_minutes: f64,
    calories: f64,
    protein_grams: f64,
    carbs_grams: f64,
    fat_grams: f64,
    ingredients: Vec<AiIngredient>,
    instructions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AiIngredient {
    name: String,
    quantity: f64,
    unit: String,
}

/// Plan days and the recipes they reference, produced from one payload
#[derive(Debug, Clone)]
pub struct ParsedMealPlan {
    /// Seven dated days starting at the requested start date
    pub days: Vec<DailyMealSlot>,
    /// One recipe per filled slot, each with a fresh identifier
    pub recipes: Vec<Recipe>,
}

/// Remove a surrounding Markdown code fence (```` ```json ```` or ```` ``` ````)
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

fn slot_key(meal_type: MealType) -> &'static str {
    match meal_type {
        MealType::Breakfast => "kahvalti",
        MealType::Lunch => "ogle_yemegi",
        MealType::Dinner => "aksam_yemegi",
        MealType::Snack => "ara_ogun",
    }
}

fn non_negative(value: f64, field: &str, context: &str) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::invalid_structure(format!(
            "{context}: {field} must be a non-negative number, got {value}"
        )))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u32 {
    value.round().min(f64::from(u32::MAX)) as u32
}

impl AiMeals {
    fn into_slots(self) -> [(MealType, Option<AppResult<AiRecipe>>); 4] {
        let snack = self.ara_ogun.map(|value| {
            serde_json::from_value(value).map_err(|e| {
                AppError::invalid_structure(format!("ara_ogun has an unexpected shape: {e}"))
                    .with_source(e)
            })
        });
        [
            (MealType::Breakfast, Some(Ok(self.kahvalti))),
            (MealType::Lunch, Some(Ok(self.ogle_yemegi))),
            (MealType::Dinner, Some(Ok(self.aksam_yemegi))),
            (MealType::Snack, snack),
        ]
    }
}

impl AiRecipe {
    fn into_recipe(self, id: RecipeId, context: &str) -> AppResult<Recipe> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_structure(format!(
                "{context}: recipe name is empty"
            )));
        }
        if self.ingredients.is_empty() {
            return Err(AppError::invalid_structure(format!(
                "{context}: recipe '{}' has no ingredients",
                self.name
            )));
        }
        if self.instructions.iter().all(|step| step.trim().is_empty()) {
            return Err(AppError::invalid_structure(format!(
                "{context}: recipe '{}' has no instructions",
                self.name
            )));
        }

        let ingredients = self
            .ingredients
            .into_iter()
            .map(|ingredient| {
                if ingredient.name.trim().is_empty() {
                    return Err(AppError::invalid_structure(format!(
                        "{context}: ingredient name is empty"
                    )));
                }
                if !(ingredient.quantity.is_finite() && ingredient.quantity > 0.0) {
                    return Err(AppError::invalid_structure(format!(
                        "{context}: ingredient '{}' has non-positive quantity {}",
                        ingredient.name, ingredient.quantity
                    )));
                }
                Ok(Ingredient::new(
                    ingredient.name.trim(),
                    ingredient.quantity,
                    ingredient.unit.trim(),
                ))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Recipe {
            id,
            title: self.name.trim().to_owned(),
            description: self.description,
            cuisine: self.cuisine_type,
            prep_minutes: whole(non_negative(self.prep_time_minutes, "prep_time_minutes", context)?),
            cook_minutes: whole(non_negative(self.cook_time_minutes, "cook_time_minutes", context)?),
            calories: whole(non_negative(self.calories, "calories", context)?),
            protein_g: non_negative(self.protein_grams, "protein_grams", context)?,
            carbs_g: non_negative(self.carbs_grams, "carbs_grams", context)?,
            fat_g: non_negative(self.fat_grams, "fat_grams", context)?,
            ingredients,
            instructions: self.instructions,
        })
    }
}

/// Parse and validate an AI meal plan payload
///
/// Days are re-dated from `start_date` and relabelled with their weekday; the
/// `day` label in the payload is only used in error messages. With three meals
/// per day an `ara_ogun` entry is ignored; with four it is required.
///
/// # Errors
///
/// - `AI_RESPONSE_UNPARSEABLE` when the text (after fence stripping) is not JSON
/// - `AI_RESPONSE_INVALID` when the JSON does not have exactly seven days, a
///   day misses a required slot, or a recipe record lacks any field (name,
///   description, cuisine, prep/cook minutes, nutrition, ingredients with
///   units, instructions) or carries a negative value
pub fn parse_meal_plan_response(
    text: &str,
    meals: MealsPerDay,
    start_date: NaiveDate,
) -> AppResult<ParsedMealPlan> {
    let cleaned = strip_code_fences(text);
    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| AppError::parse(format!("AI response is not valid JSON: {e}")).with_source(e))?;
    let payload: AiMealPlanPayload = serde_json::from_value(value).map_err(|e| {
        AppError::invalid_structure(format!("AI response has an unexpected shape: {e}"))
            .with_source(e)
    })?;

    if payload.days.len() != PLAN_LENGTH_DAYS {
        return Err(AppError::invalid_structure(format!(
            "AI response must contain exactly {PLAN_LENGTH_DAYS} days, got {}",
            payload.days.len()
        )));
    }

    let mut days = MealPlan::empty_week(start_date)?;
    let mut recipes = Vec::with_capacity(PLAN_LENGTH_DAYS * usize::from(meals.count()));

    for (index, (ai_day, slot)) in payload.days.into_iter().zip(&mut days).enumerate() {
        for (meal_type, ai_recipe) in ai_day.meals.into_slots() {
            if !meals.slots().contains(&meal_type) {
                continue;
            }
            let context = format!(
                "day {} ({}) {}",
                index + 1,
                ai_day.day,
                slot_key(meal_type)
            );
            let Some(ai_recipe) = ai_recipe else {
                return Err(AppError::invalid_structure(format!(
                    "{context}: slot is missing"
                )));
            };
            let id = RecipeId::new(format!("{AI_RECIPE_ID_PREFIX}{}", Uuid::new_v4()));
            recipes.push(ai_recipe?.into_recipe(id.clone(), &context)?);
            slot.meals.insert(meal_type, id);
        }
    }

    Ok(ParsedMealPlan { days, recipes })
}
