// ABOUTME: AI generation configuration: Gemini credentials, sampling parameters, retry policy
// ABOUTME: Environment-only loading with explicit "is configured" check for the API key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::time::Duration;

use sofra_core::errors::{AppError, AppResult, ErrorCode};

use crate::generation::retry::RetryPolicy;

/// Placeholder key shipped in sample environment files; never a real key
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key";

/// AI text-completion settings
#[derive(Clone)]
pub struct AiConfig {
    /// Gemini API key; `None` disables AI generation
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling
    pub top_k: u32,
    /// Nucleus sampling
    pub top_p: f32,
    /// Maximum output tokens
    pub max_output_tokens: u32,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Attempts before giving up (first attempt included)
    pub max_attempts: u32,
    /// Base of the exponential backoff, in seconds
    pub backoff_base_secs: u64,
}

impl AiConfig {
    /// Environment variable for the Gemini API key
    pub const API_KEY_ENV_VAR: &'static str = "GEMINI_API_KEY";
    /// Environment variable for the model name
    pub const MODEL_ENV_VAR: &'static str = "SOFRA_AI_MODEL";
    /// Environment variable for the sampling temperature
    pub const TEMPERATURE_ENV_VAR: &'static str = "SOFRA_AI_TEMPERATURE";
    /// Environment variable for the output token limit
    pub const MAX_OUTPUT_TOKENS_ENV_VAR: &'static str = "SOFRA_AI_MAX_OUTPUT_TOKENS";
    /// Environment variable for the request timeout in seconds
    pub const TIMEOUT_SECS_ENV_VAR: &'static str = "SOFRA_AI_TIMEOUT_SECS";
    /// Environment variable for the attempt count
    pub const MAX_ATTEMPTS_ENV_VAR: &'static str = "SOFRA_AI_MAX_ATTEMPTS";
    /// Environment variable for the backoff base in seconds
    pub const BACKOFF_BASE_SECS_ENV_VAR: &'static str = "SOFRA_AI_BACKOFF_BASE_SECS";

    /// Default model
    pub const DEFAULT_MODEL: &'static str = "gemini-pro";
    /// Default request timeout
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    /// Load from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when a numeric variable is set but unparseable
    /// or out of range
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            api_key: env::var(Self::API_KEY_ENV_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env::var(Self::MODEL_ENV_VAR)
                .ok()
                .filter(|model| !model.is_empty())
                .unwrap_or(defaults.model),
            temperature: parse_env(Self::TEMPERATURE_ENV_VAR, defaults.temperature)?,
            top_k: defaults.top_k,
            top_p: defaults.top_p,
            max_output_tokens: parse_env(
                Self::MAX_OUTPUT_TOKENS_ENV_VAR,
                defaults.max_output_tokens,
            )?,
            request_timeout: Duration::from_secs(parse_env(
                Self::TIMEOUT_SECS_ENV_VAR,
                Self::DEFAULT_TIMEOUT_SECS,
            )?),
            max_attempts: parse_env(Self::MAX_ATTEMPTS_ENV_VAR, defaults.max_attempts)?,
            backoff_base_secs: parse_env(
                Self::BACKOFF_BASE_SECS_ENV_VAR,
                defaults.backoff_base_secs,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Whether a usable API key is present
    ///
    /// Empty keys and the sample placeholder count as not configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map(str::trim)
            .is_some_and(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
    }

    /// Retry policy derived from the attempt count and backoff base
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.backoff_base_secs)
    }

    /// Check ranges
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` for zero attempts, a zero timeout, or a
    /// temperature outside 0.0..=2.0
    pub fn validate(&self) -> AppResult<()> {
        if self.max_attempts == 0 {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must be at least 1", Self::MAX_ATTEMPTS_ENV_VAR),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must be positive", Self::TIMEOUT_SECS_ENV_VAR),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must be between 0.0 and 2.0", Self::TEMPERATURE_ENV_VAR),
            ));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Self::DEFAULT_MODEL.to_owned(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 8192,
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            max_attempts: RetryPolicy::DEFAULT_MAX_ATTEMPTS,
            backoff_base_secs: RetryPolicy::DEFAULT_BACKOFF_BASE_SECS,
        }
    }
}

impl Debug for AiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("top_k", &self.top_k)
            .field("top_p", &self.top_p)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("request_timeout", &self.request_timeout)
            .field("max_attempts", &self.max_attempts)
            .field("backoff_base_secs", &self.backoff_base_secs)
            .finish()
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|_| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{key} has an invalid value: {raw}"),
            )
        }),
        _ => Ok(default),
    }
}
