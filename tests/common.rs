// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Provides sample profiles, a Turkish recipe corpus, scripted providers, and recording delays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `sofra`

use std::collections::{BTreeSet, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};
use sofra::errors::{AppError, AppResult};
use sofra::generation::Delay;
use sofra::llm::{ChatRequest, ChatResponse, LlmProvider};
use sofra::models::{
    ActivityLevel, BiologicalSex, DietaryTag, Ingredient, MealPlan, MealType, PrimaryGoal,
    Recipe, RecipeId, UserProfile,
};
use sofra::store::MealPlanStore;
use uuid::Uuid;

// ============================================================================
// Profiles
// ============================================================================

/// 30 y female, 65 kg, 165 cm, moderate activity, losing weight: target 1624 kcal
pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        name: "Ayşe".to_owned(),
        age: 30,
        sex: BiologicalSex::Female,
        formula_branch: None,
        weight_kg: 65.0,
        height_cm: 165.0,
        activity_level: ActivityLevel::Moderate,
        goal: PrimaryGoal::LoseWeight,
        dietary_preferences: BTreeSet::new(),
        is_premium: false,
    }
}

/// Sample profile restricted by `tags`
pub fn profile_with_tags(tags: &[DietaryTag]) -> UserProfile {
    UserProfile {
        dietary_preferences: tags.iter().copied().collect(),
        ..sample_profile()
    }
}

pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

// ============================================================================
// Recipes
// ============================================================================

pub fn recipe(
    id: &str,
    title: &str,
    calories: u32,
    macros: (f64, f64, f64),
    ingredients: &[(&str, f64, &str)],
) -> Recipe {
    let (protein_g, carbs_g, fat_g) = macros;
    Recipe {
        id: RecipeId::new(id),
        title: title.to_owned(),
        description: String::new(),
        cuisine: "Turkish".to_owned(),
        prep_minutes: 10,
        cook_minutes: 15,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        ingredients: ingredients
            .iter()
            .map(|(name, quantity, unit)| Ingredient::new(*name, *quantity, *unit))
            .collect(),
        instructions: vec!["Hazırla".to_owned(), "Pişir".to_owned()],
    }
}

/// Small corpus that fills every meal bucket for the sample profile
pub fn sample_corpus() -> Vec<Recipe> {
    vec![
        recipe(
            "menemen",
            "Menemen",
            320,
            (18.0, 12.0, 22.0),
            &[("Yumurta", 3.0, "adet"), ("Domates", 2.0, "adet"), ("Yeşil biber", 2.0, "adet")],
        ),
        recipe(
            "yulaf-bowl",
            "Meyveli Yulaf Bowl",
            380,
            (14.0, 60.0, 9.0),
            &[("Yulaf", 80.0, "g"), ("Süt", 1.0, "su bardağı"), ("Bal", 1.0, "tatlı kaşığı")],
        ),
        recipe(
            "mercimek-corbasi",
            "Mercimek Çorbası",
            280,
            (16.0, 40.0, 6.0),
            &[
                ("Kırmızı mercimek", 1.0, "su bardağı"),
                ("Soğan", 1.0, "adet"),
                ("Havuç", 1.0, "adet"),
                ("Zeytinyağı", 1.0, "yemek kaşığı"),
            ],
        ),
        recipe(
            "nohut-salata",
            "Nohutlu Salata",
            450,
            (17.0, 52.0, 18.0),
            &[
                ("Nohut", 150.0, "g"),
                ("Domates", 2.0, "adet"),
                ("Salatalık", 1.0, "adet"),
                ("Zeytinyağı", 2.0, "yemek kaşığı"),
            ],
        ),
        recipe(
            "tavuk-sis",
            "Tavuk Şiş",
            520,
            (48.0, 20.0, 24.0),
            &[("Tavuk göğsü", 250.0, "g"), ("Yoğurt", 100.0, "g"), ("Yeşil biber", 1.0, "adet")],
        ),
        recipe(
            "taze-fasulye",
            "Zeytinyağlı Taze Fasulye",
            350,
            (8.0, 30.0, 20.0),
            &[("Taze fasulye", 500.0, "g"), ("Domates", 1.0, "adet"), ("Soğan", 1.0, "adet")],
        ),
        recipe(
            "levrek",
            "Izgara Levrek",
            610,
            (52.0, 10.0, 38.0),
            &[("Levrek balık", 1.0, "adet"), ("Limon", 1.0, "adet"), ("Tuz", 1.0, "çay kaşığı")],
        ),
        recipe(
            "mercimek-koftesi",
            "Mercimek Köftesi",
            430,
            (15.0, 70.0, 9.0),
            &[("Kırmızı mercimek", 1.0, "su bardağı"), ("Bulgur", 1.0, "su bardağı")],
        ),
        recipe(
            "meyve-tabagi",
            "Mevsim Meyve Tabağı",
            150,
            (2.0, 35.0, 1.0),
            &[("Elma", 1.0, "adet"), ("Portakal", 1.0, "adet")],
        ),
        recipe(
            "cevizli-yogurt",
            "Cevizli Yoğurt",
            220,
            (10.0, 12.0, 14.0),
            &[("Yoğurt", 150.0, "g"), ("Ceviz", 30.0, "g")],
        ),
    ]
}

// ============================================================================
// AI payloads
// ============================================================================

pub fn ai_recipe(name: &str, calories: u32) -> Value {
    json!({
        "name": name,
        "description": "Ev yapımı",
        "cuisine_type": "Turkish",
        "prep_time_minutes": 10,
        "cook_time_minutes": 20,
        "calories": calories,
        "protein_grams": 25,
        "carbs_grams": 40,
        "fat_grams": 15,
        "ingredients": [
            {"name": "Domates", "quantity": 2, "unit": "adet"},
            {"name": "Zeytinyağı", "quantity": 1, "unit": "yemek kaşığı"}
        ],
        "instructions": ["Doğra", "Pişir"]
    })
}

/// Seven-day AI payload; every day uses the same four titles
pub fn ai_payload(day_count: usize, with_snack: bool) -> Value {
    let labels = [
        "Pazartesi", "Salı", "Çarşamba", "Perşembe", "Cuma", "Cumartesi", "Pazar",
    ];
    let days: Vec<Value> = (0..day_count)
        .map(|index| {
            let mut meals = json!({
                "kahvalti": ai_recipe("Peynirli Omlet", 400),
                "ogle_yemegi": ai_recipe("Mercimek Çorbası", 550),
                "aksam_yemegi": ai_recipe("Fırında Sebzeli Tavuk", 650),
            });
            if with_snack {
                meals["ara_ogun"] = ai_recipe("Meyveli Yoğurt", 200);
            }
            json!({"day": labels[index % labels.len()], "meals": meals})
        })
        .collect();
    json!({
        "days": days,
        "total_weekly_calories": 11368,
        "daily_average_calories": 1624
    })
}

// ============================================================================
// Test doubles
// ============================================================================

/// Provider that replays scripted results and records every request
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<AppResult<String>>>,
    fallback: fn() -> AppResult<String>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    /// Replays `responses` in order, then repeats `fallback`
    pub fn new(responses: Vec<AppResult<String>>, fallback: fn() -> AppResult<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            fallback,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with a transport error
    pub fn always_unavailable() -> Self {
        Self::new(Vec::new(), || {
            Err(AppError::transport("Gemini", "connection refused"))
        })
    }

    /// Returns `text` on every call
    pub fn always(text: String) -> Self {
        Self::new(vec![Ok(text)], || Err(AppError::internal("script exhausted")))
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.responses.lock().unwrap().pop_front();
        let content = next.unwrap_or_else(|| (self.fallback)())?;
        Ok(ChatResponse {
            content,
            model: "scripted-model".to_owned(),
            usage: None,
            finish_reason: Some("STOP".to_owned()),
        })
    }
}

/// Delay that records requested durations without sleeping
#[derive(Default)]
pub struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

// ============================================================================
// Plans and stores
// ============================================================================

/// Seven-day plan using the same recipe ids every day
pub fn uniform_plan(owner_id: Uuid, start: NaiveDate, slots: &[(MealType, &str)]) -> MealPlan {
    let mut days = MealPlan::empty_week(start).unwrap();
    for day in &mut days {
        for (meal_type, id) in slots {
            day.meals.insert(*meal_type, RecipeId::new(*id));
        }
    }
    MealPlan::new(owner_id, start, days).unwrap()
}

/// Store that knows one profile but fails every other call
pub struct FailingStore {
    pub profile: UserProfile,
}

#[async_trait]
impl MealPlanStore for FailingStore {
    async fn get_profile(&self, owner_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok((owner_id == self.profile.id).then(|| self.profile.clone()))
    }

    async fn upsert_profile(&self, _profile: &UserProfile) -> AppResult<()> {
        Err(AppError::storage("disk full"))
    }

    async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        Err(AppError::storage("recipe table unavailable"))
    }

    async fn save_recipes(&self, _recipes: &[Recipe]) -> AppResult<()> {
        Err(AppError::storage("disk full"))
    }

    async fn list_plans(&self, _owner_id: Uuid) -> AppResult<Vec<MealPlan>> {
        Ok(Vec::new())
    }

    async fn get_plan(&self, _plan_id: Uuid) -> AppResult<Option<MealPlan>> {
        Err(AppError::storage("plan table unavailable"))
    }

    async fn save_plan(&self, _plan: &MealPlan) -> AppResult<()> {
        Err(AppError::storage("disk full"))
    }
}
