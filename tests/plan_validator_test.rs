// ABOUTME: Tests for the advisory plan review against nutrition targets
// ABOUTME: Covers calorie and protein tolerances, the minimum intake check, and unresolved recipe ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sofra::errors::ErrorCode;
use sofra::intelligence::{validate, MealPlanningConfig, PlanIssue};
use sofra::models::{MealType, UserProfile};

mod common;

#[test]
fn test_rule_based_week_passes_review() {
    let profile = common::sample_profile();
    let plan = common::uniform_plan(
        profile.id,
        common::monday(),
        &[
            (MealType::Breakfast, "yulaf-bowl"),
            (MealType::Lunch, "tavuk-sis"),
            (MealType::Dinner, "levrek"),
        ],
    );

    let review = validate(
        &profile,
        &plan,
        &common::sample_corpus(),
        &MealPlanningConfig::default(),
    )
    .unwrap();

    assert!(review.is_valid, "unexpected issues: {:?}", review.issues);
    assert!(review.issues.is_empty());
    assert!((review.average_nutrition.calories - 1510.0).abs() < 1e-9);
    assert!((review.average_nutrition.protein_g - 114.0).abs() < 1e-9);
}

#[test]
fn test_low_energy_week_reports_every_issue_in_order() {
    let profile = common::sample_profile();
    let plan = common::uniform_plan(
        profile.id,
        common::monday(),
        &[
            (MealType::Breakfast, "meyve-tabagi"),
            (MealType::Lunch, "meyve-tabagi"),
            (MealType::Dinner, "meyve-tabagi"),
        ],
    );

    let review = validate(
        &profile,
        &plan,
        &common::sample_corpus(),
        &MealPlanningConfig::default(),
    )
    .unwrap();

    assert!(!review.is_valid);
    assert_eq!(review.issues.len(), 3);
    match &review.issues[0] {
        PlanIssue::CalorieDeviation {
            average,
            target,
            deviation,
        } => {
            assert!((average - 450.0).abs() < 1e-9);
            assert!((target - 1624.0).abs() < 1e-9);
            assert!((deviation - (1174.0 / 1624.0)).abs() < 1e-9);
        }
        other => panic!("expected calorie deviation, got {other:?}"),
    }
    assert!(matches!(
        review.issues[1],
        PlanIssue::ProteinDeviation { .. }
    ));
    assert!(matches!(
        review.issues[2],
        PlanIssue::BelowMinimumCalories { minimum, .. } if (minimum - 1200.0).abs() < 1e-9
    ));
}

#[test]
fn test_protein_deviation_alone() {
    let profile = common::sample_profile();
    let plan = common::uniform_plan(
        profile.id,
        common::monday(),
        &[
            (MealType::Breakfast, "yulaf-bowl"),
            (MealType::Lunch, "nohut-salata"),
            (MealType::Dinner, "levrek"),
        ],
    );

    let review = validate(
        &profile,
        &plan,
        &common::sample_corpus(),
        &MealPlanningConfig::default(),
    )
    .unwrap();

    // 1440 kcal is within 15 % of 1624; 83 g protein is far from 142 g
    assert_eq!(review.issues.len(), 1);
    assert!(matches!(
        review.issues[0],
        PlanIssue::ProteinDeviation { .. }
    ));
    assert!(review.issues[0].to_string().contains("protein"));
}

#[test]
fn test_unknown_recipe_ids_contribute_nothing() {
    let profile = common::sample_profile();
    let plan = common::uniform_plan(
        profile.id,
        common::monday(),
        &[
            (MealType::Breakfast, "yulaf-bowl"),
            (MealType::Lunch, "silinmis-tarif"),
            (MealType::Dinner, "levrek"),
        ],
    );

    let review = validate(
        &profile,
        &plan,
        &common::sample_corpus(),
        &MealPlanningConfig::default(),
    )
    .unwrap();

    assert!((review.average_nutrition.calories - 990.0).abs() < 1e-9);
    assert!(!review.is_valid);
}

#[test]
fn test_review_requires_computable_targets() {
    let profile = UserProfile {
        height_cm: 0.0,
        ..common::sample_profile()
    };
    let plan = common::uniform_plan(
        profile.id,
        common::monday(),
        &[
            (MealType::Breakfast, "yulaf-bowl"),
            (MealType::Lunch, "tavuk-sis"),
            (MealType::Dinner, "levrek"),
        ],
    );

    let error = validate(
        &profile,
        &plan,
        &common::sample_corpus(),
        &MealPlanningConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
