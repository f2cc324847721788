// ABOUTME: Prompt templates for LLM interactions loaded at compile time
// ABOUTME: Renders the weekly meal plan prompt from a user profile and calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.
//! Placeholders use `{{name}}` syntax and are replaced verbatim.

use sofra_core::models::{
    ActivityLevel, BiologicalSex, DietaryTag, MealsPerDay, PrimaryGoal, UserProfile,
};

/// Weekly meal plan prompt template (Turkish)
pub const MEAL_PLAN_PROMPT_TEMPLATE: &str = include_str!("meal_plan.md");

/// Placeholder shown when the profile has no dietary restrictions
const NO_RESTRICTIONS: &str = "Kısıtlama yok";

const SNACK_SLOT: &str = ",\n        \"ara_ogun\": { /* aynı format */ }";

const fn sex_label(sex: BiologicalSex) -> &'static str {
    match sex {
        BiologicalSex::Male => "Erkek",
        BiologicalSex::Female => "Kadın",
        BiologicalSex::Other => "Diğer",
    }
}

const fn activity_label(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Sedentary => "Hareketsiz (masa başı işi)",
        ActivityLevel::Light => "Az aktif (haftada 1-3 gün hafif egzersiz)",
        ActivityLevel::Moderate => "Orta aktif (haftada 3-5 gün egzersiz)",
        ActivityLevel::Active => "Çok aktif (haftada 6-7 gün yoğun egzersiz)",
    }
}

const fn goal_label(goal: PrimaryGoal) -> &'static str {
    match goal {
        PrimaryGoal::LoseWeight => "Kilo vermek",
        PrimaryGoal::MaintainWeight => "Kilosunu korumak",
        PrimaryGoal::GainMuscle => "Kas yapmak",
    }
}

const fn meal_structure(meals: MealsPerDay) -> &'static str {
    match meals {
        MealsPerDay::Three => "Kahvaltı, Öğle Yemeği ve Akşam Yemeği",
        MealsPerDay::Four => "Kahvaltı, Öğle Yemeği, Akşam Yemeği ve Ara Öğün",
    }
}

/// Render the weekly meal plan prompt
#[must_use]
pub fn build_meal_plan_prompt(
    profile: &UserProfile,
    target_calories: u32,
    meals: MealsPerDay,
) -> String {
    let restrictions = if profile.dietary_preferences.is_empty() {
        NO_RESTRICTIONS.to_owned()
    } else {
        profile
            .dietary_preferences
            .iter()
            .map(DietaryTag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let snack_slot = match meals {
        MealsPerDay::Three => "",
        MealsPerDay::Four => SNACK_SLOT,
    };

    MEAL_PLAN_PROMPT_TEMPLATE
        .replace("{{name}}", &profile.name)
        .replace("{{age}}", &profile.age.to_string())
        .replace("{{sex}}", sex_label(profile.sex))
        .replace("{{weight_kg}}", &profile.weight_kg.to_string())
        .replace("{{height_cm}}", &profile.height_cm.to_string())
        .replace("{{activity}}", activity_label(profile.activity_level))
        .replace("{{goal}}", goal_label(profile.goal))
        .replace("{{restrictions}}", &restrictions)
        .replace("{{meal_structure}}", meal_structure(meals))
        .replace("{{snack_slot}}", snack_slot)
        .replace(
            "{{weekly_calories}}",
            &u64::from(target_calories).saturating_mul(7).to_string(),
        )
        .replace("{{target_calories}}", &target_calories.to_string())
}
