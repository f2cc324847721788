// ABOUTME: Tests for the owner-facing meal plan service over the in-memory store
// ABOUTME: Covers repeat generation, the premium refresh gate, duplicate recipe suppression, swaps, and grocery lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use sofra::config::{AiConfig, MealPlanningConfig};
use sofra::engine::MealPlanningEngine;
use sofra::errors::ErrorCode;
use sofra::generation::{AiPlanGenerator, FixedClock};
use sofra::models::{MealType, MealsPerDay, PlanSource, RecipeId, UserProfile};
use sofra::services::MealPlanService;
use sofra::store::{InMemoryStore, MealPlanStore, StoreSnapshot};
use uuid::Uuid;

mod common;

use common::{FailingStore, RecordingDelay, ScriptedProvider};

fn engine() -> MealPlanningEngine {
    MealPlanningEngine::new(MealPlanningConfig::default())
        .unwrap()
        .with_clock(Arc::new(FixedClock(common::monday())))
}

fn seeded_store(profile: &UserProfile) -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::from_snapshot(StoreSnapshot {
        profiles: vec![profile.clone()],
        recipes: common::sample_corpus(),
        plans: Vec::new(),
    }))
}

fn service(store: &Arc<InMemoryStore>, engine: MealPlanningEngine) -> MealPlanService {
    MealPlanService::new(store.clone(), Arc::new(engine))
}

#[tokio::test]
async fn test_first_request_generates_and_saves() {
    let profile = common::sample_profile();
    let store = seeded_store(&profile);
    let service = service(&store, engine());

    let generated = service
        .generate_for_owner(profile.id, MealsPerDay::Three, false)
        .await
        .unwrap();

    assert_eq!(generated.source, PlanSource::RuleBased);

    let saved = store.list_plans(profile.id).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, generated.plan.id);
}

#[tokio::test]
async fn test_every_request_without_refresh_generates_new_plan() {
    let profile = common::sample_profile();
    let store = seeded_store(&profile);
    let service = service(&store, engine());

    let first = service
        .generate_for_owner(profile.id, MealsPerDay::Three, false)
        .await
        .unwrap();
    let second = service
        .generate_for_owner(profile.id, MealsPerDay::Four, false)
        .await
        .unwrap();

    assert_ne!(second.plan.id, first.plan.id);
    assert!(second.plan.days[0].recipe_for(MealType::Snack).is_some());

    let saved = store.list_plans(profile.id).await.unwrap();
    assert_eq!(saved.len(), 2);
    assert!(saved.iter().any(|plan| plan.id == second.plan.id));
}

#[tokio::test]
async fn test_refresh_requires_premium() {
    let profile = common::sample_profile();
    let store = seeded_store(&profile);
    let service = service(&store, engine());

    service
        .generate_for_owner(profile.id, MealsPerDay::Three, false)
        .await
        .unwrap();
    let error = service
        .generate_for_owner(profile.id, MealsPerDay::Three, true)
        .await
        .err()
        .unwrap();

    assert_eq!(error.code, ErrorCode::PermissionDenied);
    assert_eq!(store.list_plans(profile.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_premium_refresh_creates_new_plan() {
    let profile = UserProfile {
        is_premium: true,
        ..common::sample_profile()
    };
    let store = seeded_store(&profile);
    let service = service(&store, engine());

    let first = service
        .generate_for_owner(profile.id, MealsPerDay::Three, false)
        .await
        .unwrap();
    let refreshed = service
        .generate_for_owner(profile.id, MealsPerDay::Four, true)
        .await
        .unwrap();

    assert_ne!(refreshed.plan.id, first.plan.id);
    assert!(refreshed.plan.days[0]
        .recipe_for(MealType::Snack)
        .is_some());
    assert_eq!(store.list_plans(profile.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_forced_first_request_needs_no_premium() {
    let profile = common::sample_profile();
    let store = seeded_store(&profile);
    let service = service(&store, engine());

    let generated = service
        .generate_for_owner(profile.id, MealsPerDay::Three, true)
        .await
        .unwrap();

    assert_eq!(store.list_plans(profile.id).await.unwrap()[0].id, generated.plan.id);
}

#[tokio::test]
async fn test_unknown_owner_is_not_found() {
    let store = seeded_store(&common::sample_profile());
    let service = service(&store, engine());

    let error = service
        .generate_for_owner(Uuid::new_v4(), MealsPerDay::Three, false)
        .await
        .err()
        .unwrap();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_ai_titles_matching_corpus_reuse_existing_recipes() {
    let profile = common::sample_profile();
    let store = seeded_store(&profile);
    let provider = Arc::new(ScriptedProvider::always(
        common::ai_payload(7, false).to_string(),
    ));
    let generator = AiPlanGenerator::new(provider.clone(), AiConfig::default())
        .with_delay(Arc::new(RecordingDelay::default()));
    let service = service(&store, engine().with_ai(generator));

    let generated = service
        .generate_for_owner(profile.id, MealsPerDay::Three, false)
        .await
        .unwrap();

    assert_eq!(generated.source, PlanSource::Ai);

    // "Mercimek Çorbası" already exists, so every lunch points at the corpus recipe
    for day in &generated.plan.days {
        assert_eq!(
            day.recipe_for(MealType::Lunch),
            Some(&RecipeId::new("mercimek-corbasi"))
        );
    }
    assert_eq!(generated.new_recipes.len(), 14);
    assert!(generated
        .new_recipes
        .iter()
        .all(|recipe| recipe.title != "Mercimek Çorbası"));

    let recipes = store.list_recipes().await.unwrap();
    assert_eq!(recipes.len(), common::sample_corpus().len() + 14);
    for id in generated.plan.recipe_ids() {
        assert!(recipes.iter().any(|recipe| recipe.id == *id));
    }
}

#[tokio::test]
async fn test_swap_meal_persists_change() {
    let profile = common::sample_profile();
    let store = seeded_store(&profile);
    let service = service(&store, engine());
    let plan_id = service
        .generate_for_owner(profile.id, MealsPerDay::Three, false)
        .await
        .unwrap()
        .plan
        .id;

    let updated = service
        .swap_meal(plan_id, 4, MealType::Lunch, &RecipeId::new("mercimek-corbasi"))
        .await
        .unwrap();

    let stored = store.get_plan(plan_id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
    assert_eq!(
        stored.days[4].recipe_for(MealType::Lunch),
        Some(&RecipeId::new("mercimek-corbasi"))
    );
}

#[tokio::test]
async fn test_swap_meal_errors() {
    let profile = common::sample_profile();
    let store = seeded_store(&profile);
    let service = service(&store, engine());
    let plan_id = service
        .generate_for_owner(profile.id, MealsPerDay::Three, false)
        .await
        .unwrap()
        .plan
        .id;

    let unknown_plan = service
        .swap_meal(Uuid::new_v4(), 0, MealType::Lunch, &RecipeId::new("menemen"))
        .await
        .unwrap_err();
    assert_eq!(unknown_plan.code, ErrorCode::ResourceNotFound);

    let bad_day = service
        .swap_meal(plan_id, 9, MealType::Lunch, &RecipeId::new("menemen"))
        .await
        .unwrap_err();
    assert_eq!(bad_day.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_grocery_list_for_stored_plan() {
    let profile = common::sample_profile();
    let store = seeded_store(&profile);
    let service = service(&store, engine());
    let plan_id = service
        .generate_for_owner(profile.id, MealsPerDay::Three, false)
        .await
        .unwrap()
        .plan
        .id;

    let items = service.grocery_list(plan_id).await.unwrap();

    let oats = items
        .iter()
        .find(|item| item.canonical_name == "yulaf")
        .unwrap();
    assert!((oats.quantity - 560.0).abs() < 1e-9);
    assert!(items.iter().all(|item| !item.checked));
}

#[tokio::test]
async fn test_store_errors_propagate_unchanged() {
    let profile = common::sample_profile();
    let store = Arc::new(FailingStore {
        profile: profile.clone(),
    });
    let service = MealPlanService::new(store, Arc::new(engine()));

    let error = service
        .generate_for_owner(profile.id, MealsPerDay::Three, false)
        .await
        .err()
        .unwrap();
    assert_eq!(error.code, ErrorCode::StorageError);
    assert_eq!(error.message, "recipe table unavailable");

    let error = service.grocery_list(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}
