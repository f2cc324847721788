// ABOUTME: JSON input loading and engine construction for sofra-cli commands
// ABOUTME: Attaches the file path to every read or decode failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use sofra::config::{AiConfig, MealPlanningConfig};
use sofra::engine::MealPlanningEngine;
use tokio::fs;

/// Read and decode a JSON file
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

/// Engine with default tables; AI is enabled from the environment unless `rule_based_only`
pub fn build_engine(rule_based_only: bool) -> Result<MealPlanningEngine> {
    let config = MealPlanningConfig::default();
    let engine = if rule_based_only {
        MealPlanningEngine::new(config)?
    } else {
        MealPlanningEngine::from_ai_config(config, AiConfig::from_env()?)?
    };
    Ok(engine)
}
