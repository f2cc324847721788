// ABOUTME: Weekly meal plan model: seven daily slots mapping meal types to recipe ids
// ABOUTME: Defines MealType, MealsPerDay, DailyMealSlot, MealPlan, and PlanSource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recipe::RecipeId;
use crate::constants::plan::{weekday_label, PLAN_LENGTH_DAYS};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Named meal occasion within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Optional fourth meal
    Snack,
}

impl MealType {
    /// Meal types that every finalized day must contain
    pub const REQUIRED: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// JSON key / display form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse a meal type name (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for an unknown meal type
    pub fn parse(name: &str) -> AppResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(AppError::invalid_input(format!(
                "Unknown meal type: {other}"
            ))),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal structure requested for a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MealsPerDay {
    /// Breakfast, lunch, dinner
    #[default]
    Three,
    /// Breakfast, lunch, dinner, snack
    Four,
}

impl MealsPerDay {
    /// Slots in serving order
    #[must_use]
    pub const fn slots(&self) -> &'static [MealType] {
        match self {
            Self::Three => &[MealType::Breakfast, MealType::Lunch, MealType::Dinner],
            Self::Four => &[
                MealType::Breakfast,
                MealType::Lunch,
                MealType::Dinner,
                MealType::Snack,
            ],
        }
    }

    /// Number of slots per day
    #[must_use]
    pub const fn count(&self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u8> for MealsPerDay {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("Meals per day must be 3 or 4, got {other}"),
            )),
        }
    }
}

impl From<MealsPerDay> for u8 {
    fn from(value: MealsPerDay) -> Self {
        value.count()
    }
}

/// One day of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMealSlot {
    /// Weekday label (e.g., "Pazartesi")
    pub day: String,
    /// Calendar date of the day
    pub date: NaiveDate,
    /// Recipe chosen for each meal type
    pub meals: BTreeMap<MealType, RecipeId>,
}

impl DailyMealSlot {
    /// Create an empty slot for a date, labelled with its weekday
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            day: weekday_label(date).to_owned(),
            date,
            meals: BTreeMap::new(),
        }
    }

    /// Recipe id assigned to `meal_type`, if any
    #[must_use]
    pub fn recipe_for(&self, meal_type: MealType) -> Option<&RecipeId> {
        self.meals.get(&meal_type)
    }

    /// Whether breakfast, lunch and dinner are all assigned
    #[must_use]
    pub fn has_required_meals(&self) -> bool {
        MealType::REQUIRED
            .iter()
            .all(|meal_type| self.meals.contains_key(meal_type))
    }
}

/// Which generator produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Produced by the AI-backed generator
    Ai,
    /// Produced by the rule-based assembler
    RuleBased,
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ai => "ai",
            Self::RuleBased => "rule_based",
        })
    }
}

/// A seven-day meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Owner (profile id)
    pub owner_id: Uuid,
    /// First day
    pub start_date: NaiveDate,
    /// Last day, always `start_date + 6`
    pub end_date: NaiveDate,
    /// Exactly seven days in calendar order
    pub days: Vec<DailyMealSlot>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    /// Build a plan from finalized days
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if there are not exactly seven days, if a day
    /// lacks breakfast, lunch or dinner, or if the dates are not consecutive
    /// from `start_date`
    pub fn new(owner_id: Uuid, start_date: NaiveDate, days: Vec<DailyMealSlot>) -> AppResult<Self> {
        if days.len() != PLAN_LENGTH_DAYS {
            return Err(AppError::invalid_input(format!(
                "A meal plan must contain exactly {PLAN_LENGTH_DAYS} days, got {}",
                days.len()
            )));
        }

        for (offset, day) in (0_u64..).zip(&days) {
            if !day.has_required_meals() {
                return Err(AppError::invalid_input(format!(
                    "Day '{}' is missing breakfast, lunch or dinner",
                    day.day
                )));
            }
            if start_date.checked_add_days(Days::new(offset)) != Some(day.date) {
                return Err(AppError::invalid_input(format!(
                    "Day '{}' has date {} which does not follow start date {start_date}",
                    day.day, day.date
                )));
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            start_date,
            end_date: Self::end_date_for(start_date)?,
            days,
            created_at: Utc::now(),
        })
    }

    /// Last day of a plan starting on `start_date`
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if the date overflows the calendar
    pub fn end_date_for(start_date: NaiveDate) -> AppResult<NaiveDate> {
        start_date
            .checked_add_days(Days::new(PLAN_LENGTH_DAYS as u64 - 1))
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::ValueOutOfRange,
                    format!("Plan start date {start_date} is out of range"),
                )
            })
    }

    /// Empty, labelled day slots for a week starting on `start_date`
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if the week overflows the calendar
    pub fn empty_week(start_date: NaiveDate) -> AppResult<Vec<DailyMealSlot>> {
        Self::end_date_for(start_date)?;
        Ok(start_date
            .iter_days()
            .take(PLAN_LENGTH_DAYS)
            .map(DailyMealSlot::for_date)
            .collect())
    }

    /// Every recipe id referenced by the plan, in day then meal order
    pub fn recipe_ids(&self) -> impl Iterator<Item = &RecipeId> {
        self.days.iter().flat_map(|day| day.meals.values())
    }
}
