// ABOUTME: Tests for the AI-backed plan generator and its retry loop
// ABOUTME: Uses a scripted provider and a recording delay so no network or real sleeps are involved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use sofra::config::AiConfig;
use sofra::errors::{AppError, ErrorCode};
use sofra::generation::parse_meal_plan_response;
use sofra::generation::response::AI_RECIPE_ID_PREFIX;
use sofra::generation::{AiPlanGenerator, RetryPolicy};
use sofra::llm::build_meal_plan_prompt;
use sofra::models::{DietaryTag, MealType, MealsPerDay};

mod common;

use common::{RecordingDelay, ScriptedProvider};

fn generator(provider: &Arc<ScriptedProvider>, delay: &Arc<RecordingDelay>) -> AiPlanGenerator {
    AiPlanGenerator::new(provider.clone(), AiConfig::default()).with_delay(delay.clone())
}

fn fenced(payload: &Value) -> String {
    format!("```json\n{payload}\n```")
}

// ============================================================================
// Retry loop
// ============================================================================

#[tokio::test]
async fn test_transport_failures_exhaust_three_attempts() {
    let provider = Arc::new(ScriptedProvider::always_unavailable());
    let delay = Arc::new(RecordingDelay::default());

    let error = generator(&provider, &delay)
        .generate(
            &common::sample_profile(),
            1624,
            MealsPerDay::Three,
            common::monday(),
        )
        .await
        .err()
        .unwrap();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(provider.call_count(), 3);
    assert_eq!(
        delay.waits(),
        vec![Duration::from_secs(2), Duration::from_secs(4)]
    );
}

#[tokio::test]
async fn test_unparseable_response_is_retried() {
    let provider = Arc::new(ScriptedProvider::new(
        vec![
            Ok("Üzgünüm, şu an plan oluşturamıyorum.".to_owned()),
            Ok(fenced(&common::ai_payload(7, false))),
        ],
        || Err(AppError::internal("script exhausted")),
    ));
    let delay = Arc::new(RecordingDelay::default());

    let generated = generator(&provider, &delay)
        .generate(
            &common::sample_profile(),
            1624,
            MealsPerDay::Three,
            common::monday(),
        )
        .await
        .unwrap();

    assert_eq!(generated.attempts, 2);
    assert_eq!(provider.call_count(), 2);
    assert_eq!(delay.waits(), vec![Duration::from_secs(2)]);
}

#[tokio::test]
async fn test_wrong_day_count_fails_structurally() {
    let provider = Arc::new(ScriptedProvider::new(Vec::new(), || {
        Ok(common::ai_payload(6, false).to_string())
    }));
    let delay = Arc::new(RecordingDelay::default());

    let error = generator(&provider, &delay)
        .generate(
            &common::sample_profile(),
            1624,
            MealsPerDay::Three,
            common::monday(),
        )
        .await
        .err()
        .unwrap();

    assert_eq!(error.code, ErrorCode::AiResponseInvalid);
    assert_eq!(provider.call_count(), 3);
}

/// Payload whose lunches keep only name, nutrition and ingredients
fn payload_with_bare_lunches() -> Value {
    let mut payload = common::ai_payload(7, false);
    for day in payload["days"].as_array_mut().unwrap() {
        let lunch = day["meals"]["ogle_yemegi"].as_object_mut().unwrap();
        for field in [
            "description",
            "cuisine_type",
            "prep_time_minutes",
            "cook_time_minutes",
            "instructions",
        ] {
            lunch.remove(field);
        }
    }
    payload
}

#[tokio::test]
async fn test_incomplete_recipe_record_is_rejected_and_retried() {
    let provider = Arc::new(ScriptedProvider::new(Vec::new(), || {
        Ok(payload_with_bare_lunches().to_string())
    }));
    let delay = Arc::new(RecordingDelay::default());

    let error = generator(&provider, &delay)
        .generate(
            &common::sample_profile(),
            1624,
            MealsPerDay::Three,
            common::monday(),
        )
        .await
        .err()
        .unwrap();

    assert_eq!(error.code, ErrorCode::AiResponseInvalid);
    assert_eq!(provider.call_count(), 3);
}

#[test]
fn test_ingredient_without_unit_is_rejected() {
    let mut payload = common::ai_payload(7, false);
    payload["days"][2]["meals"]["aksam_yemegi"]["ingredients"][0]
        .as_object_mut()
        .unwrap()
        .remove("unit");

    let error = parse_meal_plan_response(
        &payload.to_string(),
        MealsPerDay::Three,
        common::monday(),
    )
    .unwrap_err();

    assert_eq!(error.code, ErrorCode::AiResponseInvalid);
}

#[test]
fn test_recipe_without_instruction_steps_is_rejected() {
    let mut payload = common::ai_payload(7, false);
    payload["days"][0]["meals"]["kahvalti"]["instructions"] = json!([]);

    let error = parse_meal_plan_response(
        &payload.to_string(),
        MealsPerDay::Three,
        common::monday(),
    )
    .unwrap_err();

    assert_eq!(error.code, ErrorCode::AiResponseInvalid);
}

#[test]
fn test_incomplete_snack_is_ignored_for_three_meals() {
    let mut payload = common::ai_payload(7, true);
    payload["days"][4]["meals"]["ara_ogun"] = json!({"name": "Elma"});

    let parsed = parse_meal_plan_response(
        &payload.to_string(),
        MealsPerDay::Three,
        common::monday(),
    )
    .unwrap();
    assert_eq!(parsed.recipes.len(), 21);

    let error = parse_meal_plan_response(
        &payload.to_string(),
        MealsPerDay::Four,
        common::monday(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::AiResponseInvalid);
}

#[tokio::test]
async fn test_non_retryable_error_stops_immediately() {
    let provider = Arc::new(ScriptedProvider::new(Vec::new(), || {
        Err(AppError::internal("provider bug"))
    }));
    let delay = Arc::new(RecordingDelay::default());

    let error = generator(&provider, &delay)
        .generate(
            &common::sample_profile(),
            1624,
            MealsPerDay::Three,
            common::monday(),
        )
        .await
        .err()
        .unwrap();

    assert_eq!(error.code, ErrorCode::InternalError);
    assert_eq!(provider.call_count(), 1);
    assert!(delay.waits().is_empty());
}

#[tokio::test]
async fn test_single_attempt_policy_never_waits() {
    let provider = Arc::new(ScriptedProvider::always_unavailable());
    let delay = Arc::new(RecordingDelay::default());

    let result = generator(&provider, &delay)
        .with_retry_policy(RetryPolicy::new(1, 2))
        .generate(
            &common::sample_profile(),
            1624,
            MealsPerDay::Three,
            common::monday(),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(provider.call_count(), 1);
    assert!(delay.waits().is_empty());
}

// ============================================================================
// Successful generation
// ============================================================================

#[tokio::test]
async fn test_fenced_payload_builds_dated_plan() {
    let profile = common::sample_profile();
    let provider = Arc::new(ScriptedProvider::always(fenced(&common::ai_payload(7, false))));
    let delay = Arc::new(RecordingDelay::default());

    let generated = generator(&provider, &delay)
        .generate(&profile, 1624, MealsPerDay::Three, common::monday())
        .await
        .unwrap();

    let plan = &generated.plan;
    assert_eq!(generated.attempts, 1);
    assert_eq!(plan.owner_id, profile.id);
    assert_eq!(plan.days.len(), 7);
    assert_eq!(plan.days[0].date, common::monday());
    assert_eq!(plan.days[0].day, "Pazartesi");
    assert_eq!(generated.recipes.len(), 21);

    for id in plan.recipe_ids() {
        assert!(id.as_str().starts_with(AI_RECIPE_ID_PREFIX));
        assert!(generated.recipes.iter().any(|recipe| recipe.id == *id));
    }
    for day in &plan.days {
        assert!(day.recipe_for(MealType::Snack).is_none());
    }

    let breakfast_id = plan.days[0].recipe_for(MealType::Breakfast).unwrap();
    let breakfast = generated
        .recipes
        .iter()
        .find(|recipe| recipe.id == *breakfast_id)
        .unwrap();
    assert_eq!(breakfast.title, "Peynirli Omlet");
    assert_eq!(breakfast.calories, 400);
    assert_eq!(breakfast.ingredients.len(), 2);
}

#[tokio::test]
async fn test_four_meals_require_snack() {
    let provider = Arc::new(ScriptedProvider::new(Vec::new(), || {
        Ok(common::ai_payload(7, false).to_string())
    }));
    let delay = Arc::new(RecordingDelay::default());

    let error = generator(&provider, &delay)
        .with_retry_policy(RetryPolicy::new(1, 2))
        .generate(
            &common::sample_profile(),
            1624,
            MealsPerDay::Four,
            common::monday(),
        )
        .await
        .err()
        .unwrap();

    assert_eq!(error.code, ErrorCode::AiResponseInvalid);
    assert!(error.message.contains("ara_ogun"));
}

#[tokio::test]
async fn test_three_meals_ignore_extra_snack() {
    let provider = Arc::new(ScriptedProvider::always(
        common::ai_payload(7, true).to_string(),
    ));
    let delay = Arc::new(RecordingDelay::default());

    let generated = generator(&provider, &delay)
        .generate(
            &common::sample_profile(),
            1624,
            MealsPerDay::Three,
            common::monday(),
        )
        .await
        .unwrap();

    assert_eq!(generated.recipes.len(), 21);
    assert!(generated.plan.days[3].recipe_for(MealType::Snack).is_none());
}

#[tokio::test]
async fn test_four_meal_plan_fills_snack() {
    let provider = Arc::new(ScriptedProvider::always(
        common::ai_payload(7, true).to_string(),
    ));
    let delay = Arc::new(RecordingDelay::default());

    let generated = generator(&provider, &delay)
        .generate(
            &common::sample_profile(),
            1624,
            MealsPerDay::Four,
            common::monday(),
        )
        .await
        .unwrap();

    assert_eq!(generated.recipes.len(), 28);
    for day in &generated.plan.days {
        assert!(day.recipe_for(MealType::Snack).is_some());
    }
}

// ============================================================================
// Request contents
// ============================================================================

#[tokio::test]
async fn test_request_carries_prompt_and_generation_settings() {
    let profile = common::profile_with_tags(&[DietaryTag::Vegetarian, DietaryTag::GlutenFree]);
    let provider = Arc::new(ScriptedProvider::always(
        common::ai_payload(7, false).to_string(),
    ));
    let delay = Arc::new(RecordingDelay::default());

    generator(&provider, &delay)
        .generate(&profile, 1624, MealsPerDay::Three, common::monday())
        .await
        .unwrap();

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    let defaults = AiConfig::default();
    assert_eq!(request.model.as_deref(), Some(defaults.model.as_str()));
    assert_eq!(request.temperature, Some(defaults.temperature));
    assert_eq!(request.top_k, Some(defaults.top_k));
    assert_eq!(request.top_p, Some(defaults.top_p));
    assert_eq!(request.max_tokens, Some(defaults.max_output_tokens));

    let prompt = &request.prompt;
    assert_eq!(
        prompt,
        &build_meal_plan_prompt(&profile, 1624, MealsPerDay::Three)
    );
}

#[test]
fn test_prompt_mentions_profile_and_targets() {
    let prompt = build_meal_plan_prompt(&common::sample_profile(), 1624, MealsPerDay::Three);

    assert!(prompt.contains("Ayşe"));
    assert!(prompt.contains("1624"));
    assert!(prompt.contains("11368"));
    assert!(prompt.contains("Kısıtlama yok"));
    assert!(prompt.contains("Kilo vermek"));
    assert!(!prompt.contains("{{"));
    assert!(!prompt.contains("ara_ogun"));

    let restricted = build_meal_plan_prompt(
        &common::profile_with_tags(&[DietaryTag::Vegan]),
        1624,
        MealsPerDay::Four,
    );
    assert!(restricted.contains("Vegan"));
    assert!(!restricted.contains("Kısıtlama yok"));
    assert!(restricted.contains("ara_ogun"));
}
