// ABOUTME: Meal plan shape constants and localized weekday labels
// ABOUTME: A plan always covers seven consecutive days starting at the generation date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days in every meal plan
pub const PLAN_LENGTH_DAYS: usize = 7;

/// Weekday labels, Monday first
pub const WEEKDAY_LABELS: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];

/// Label for a weekday
#[must_use]
pub fn weekday_label_for(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[weekday.num_days_from_monday() as usize]
}

/// Label for the weekday of `date`
#[must_use]
pub fn weekday_label(date: NaiveDate) -> &'static str {
    weekday_label_for(date.weekday())
}
