// ABOUTME: Tests for the rule-based weekly plan assembler
// ABOUTME: Covers slot targets, closest-calorie selection, tie-breaks, dietary filtering, and empty buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Days;
use sofra::errors::ErrorCode;
use sofra::intelligence::plan_assembler::{assemble_plan, select_closest, slot_targets};
use sofra::intelligence::MealPlanningConfig;
use sofra::models::{DietaryTag, MealPlan, MealType, MealsPerDay, RecipeId, UserProfile};

mod common;

fn slot(plan: &MealPlan, meal_type: MealType) -> &str {
    plan.days[0].recipe_for(meal_type).unwrap().as_str()
}

#[test]
fn test_slot_targets_three_meals() {
    let targets = slot_targets(1624, MealsPerDay::Three, &MealPlanningConfig::default());

    let expected = [
        (MealType::Breakfast, 406.0),
        (MealType::Lunch, 568.4),
        (MealType::Dinner, 649.6),
    ];
    assert_eq!(targets.len(), expected.len());
    for ((meal_type, kcal), (expected_type, expected_kcal)) in targets.iter().zip(expected) {
        assert_eq!(*meal_type, expected_type);
        assert!((kcal - expected_kcal).abs() < 1e-6);
    }
}

#[test]
fn test_slot_targets_four_meals_include_snack() {
    let targets = slot_targets(2000, MealsPerDay::Four, &MealPlanningConfig::default());

    let kcal: Vec<f64> = targets.iter().map(|(_, kcal)| *kcal).collect();
    assert_eq!(targets.last().unwrap().0, MealType::Snack);
    assert!((kcal.iter().sum::<f64>() - 2000.0).abs() < 1e-6);
    assert!((kcal[3] - 300.0).abs() < 1e-6);
}

#[test]
fn test_select_closest_prefers_first_on_tie() {
    let candidates = vec![
        common::recipe("first", "Birinci", 380, (10.0, 10.0, 10.0), &[]),
        common::recipe("second", "İkinci", 420, (10.0, 10.0, 10.0), &[]),
    ];

    let chosen = select_closest(&candidates, 400.0).unwrap();
    assert_eq!(chosen.id, RecipeId::new("first"));
    assert!(select_closest(&[], 400.0).is_none());
}

#[test]
fn test_assemble_three_meal_week() {
    let profile = common::sample_profile();
    let plan = assemble_plan(
        &profile,
        &common::sample_corpus(),
        MealsPerDay::Three,
        common::monday(),
        &MealPlanningConfig::default(),
    )
    .unwrap();

    assert_eq!(plan.owner_id, profile.id);
    assert_eq!(plan.days.len(), 7);
    assert_eq!(plan.start_date, common::monday());
    assert_eq!(plan.end_date, common::monday() + Days::new(6));
    assert_eq!(plan.days[0].day, "Pazartesi");
    assert_eq!(plan.days[6].day, "Pazar");

    assert_eq!(slot(&plan, MealType::Breakfast), "yulaf-bowl");
    assert_eq!(slot(&plan, MealType::Lunch), "tavuk-sis");
    assert_eq!(slot(&plan, MealType::Dinner), "levrek");
    assert!(plan.days[0].recipe_for(MealType::Snack).is_none());

    // Greedy per-slot selection repeats the same choice every day
    for day in &plan.days {
        assert_eq!(day.meals, plan.days[0].meals);
    }
}

#[test]
fn test_assemble_four_meal_week_fills_snack() {
    let plan = assemble_plan(
        &common::sample_profile(),
        &common::sample_corpus(),
        MealsPerDay::Four,
        common::monday(),
        &MealPlanningConfig::default(),
    )
    .unwrap();

    assert_eq!(slot(&plan, MealType::Breakfast), "yulaf-bowl");
    assert_eq!(slot(&plan, MealType::Lunch), "tavuk-sis");
    assert_eq!(slot(&plan, MealType::Dinner), "tavuk-sis");
    assert_eq!(slot(&plan, MealType::Snack), "cevizli-yogurt");
}

#[test]
fn test_assembled_ids_come_from_filtered_corpus() {
    let profile = common::profile_with_tags(&[DietaryTag::Vegetarian]);
    let plan = assemble_plan(
        &profile,
        &common::sample_corpus(),
        MealsPerDay::Three,
        common::monday(),
        &MealPlanningConfig::default(),
    )
    .unwrap();

    for id in plan.recipe_ids() {
        assert_ne!(id.as_str(), "tavuk-sis");
        assert_ne!(id.as_str(), "levrek");
    }
    assert_eq!(slot(&plan, MealType::Lunch), "nohut-salata");
    assert_eq!(slot(&plan, MealType::Dinner), "nohut-salata");
}

#[test]
fn test_assemble_fails_when_diet_removes_everything() {
    let corpus = vec![common::recipe(
        "kebap",
        "Adana Kebap",
        650,
        (40.0, 10.0, 45.0),
        &[("Dana kıyma", 200.0, "g")],
    )];
    let profile = common::profile_with_tags(&[DietaryTag::Vegetarian]);

    let error = assemble_plan(
        &profile,
        &corpus,
        MealsPerDay::Three,
        common::monday(),
        &MealPlanningConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::NoEligibleRecipes);
}

#[test]
fn test_assemble_fails_on_empty_snack_bucket() {
    let corpus: Vec<_> = common::sample_corpus()
        .into_iter()
        .filter(|recipe| recipe.calories >= 250)
        .collect();

    let error = assemble_plan(
        &common::sample_profile(),
        &corpus,
        MealsPerDay::Four,
        common::monday(),
        &MealPlanningConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::NoEligibleRecipes);
    assert!(error.message.contains("snack"));

    // The same corpus still covers three meals
    assert!(assemble_plan(
        &common::sample_profile(),
        &corpus,
        MealsPerDay::Three,
        common::monday(),
        &MealPlanningConfig::default(),
    )
    .is_ok());
}

#[test]
fn test_assemble_propagates_profile_errors() {
    let profile = UserProfile {
        weight_kg: 0.0,
        ..common::sample_profile()
    };

    let error = assemble_plan(
        &profile,
        &common::sample_corpus(),
        MealsPerDay::Three,
        common::monday(),
        &MealPlanningConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
