// ABOUTME: AI plan generator running the prompt/complete/parse cycle inside a bounded retry loop
// ABOUTME: Transport, parse, and structure failures back off and retry; others return immediately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::sync::Arc;

use chrono::NaiveDate;
use sofra_core::models::{MealPlan, MealsPerDay, Recipe, UserProfile};
use tracing::{debug, info, instrument, warn};

use super::response::{parse_meal_plan_response, ParsedMealPlan};
use super::retry::{Delay, RetryPolicy, TokioDelay};
use crate::config::AiConfig;
use crate::errors::AppResult;
use crate::llm::{build_meal_plan_prompt, ChatRequest, LlmProvider};

/// Successful AI generation
#[derive(Debug, Clone)]
pub struct AiGeneratedPlan {
    /// Finalized seven-day plan
    pub plan: MealPlan,
    /// Recipes minted for the plan's slots, one per slot
    pub recipes: Vec<Recipe>,
    /// Attempt that succeeded (1-based)
    pub attempts: u32,
}

/// Generates plans through a text-completion provider
pub struct AiPlanGenerator {
    provider: Arc<dyn LlmProvider>,
    delay: Arc<dyn Delay>,
    policy: RetryPolicy,
    config: AiConfig,
}

impl AiPlanGenerator {
    /// Create a generator with tokio sleeps and the policy derived from `config`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, config: AiConfig) -> Self {
        Self {
            provider,
            delay: Arc::new(TokioDelay),
            policy: config.retry_policy(),
            config,
        }
    }

    /// Replace the inter-attempt delay
    #[must_use]
    pub fn with_delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the retry policy
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Retry policy in effect
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.policy
    }

    fn build_request(&self, prompt: String) -> ChatRequest {
        ChatRequest::new(prompt)
            .with_model(self.config.model.clone())
            .with_temperature(self.config.temperature)
            .with_sampling(self.config.top_k, self.config.top_p)
            .with_max_tokens(self.config.max_output_tokens)
    }

    async fn attempt(
        &self,
        request: &ChatRequest,
        meals: MealsPerDay,
        start_date: NaiveDate,
    ) -> AppResult<ParsedMealPlan> {
        let response = self.provider.complete(request).await?;
        parse_meal_plan_response(&response.content, meals, start_date)
    }

    /// Generate a seven-day plan starting on `start_date`
    ///
    /// Runs at least one attempt. Retryable failures wait `base^attempt`
    /// seconds before the next attempt; once attempts are exhausted the last
    /// error is returned.
    ///
    /// # Errors
    ///
    /// The last attempt's error: transport, parse, or structural errors after
    /// exhaustion, or the first non-retryable error
    #[instrument(skip_all, fields(owner_id = %profile.id, provider = self.provider.name()))]
    pub async fn generate(
        &self,
        profile: &UserProfile,
        target_calories: u32,
        meals: MealsPerDay,
        start_date: NaiveDate,
    ) -> AppResult<AiGeneratedPlan> {
        let request = self.build_request(build_meal_plan_prompt(profile, target_calories, meals));
        let max_attempts = self.policy.max_attempts;
        let mut attempt = 1;

        loop {
            debug!(attempt, max_attempts, "Requesting AI meal plan");
            match self.attempt(&request, meals, start_date).await {
                Ok(parsed) => {
                    let plan = MealPlan::new(profile.id, start_date, parsed.days)?;
                    info!(
                        attempt,
                        plan_id = %plan.id,
                        recipes = parsed.recipes.len(),
                        "AI meal plan generated"
                    );
                    return Ok(AiGeneratedPlan {
                        plan,
                        recipes: parsed.recipes,
                        attempts: attempt,
                    });
                }
                Err(error) if error.is_retryable() && self.policy.has_attempt_after(attempt) => {
                    let delay = self.policy.delay_after(attempt);
                    warn!(
                        attempt,
                        max_attempts,
                        delay_secs = delay.as_secs(),
                        error = %error,
                        "AI meal plan attempt failed, retrying"
                    );
                    self.delay.wait(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    warn!(
                        attempt,
                        max_attempts,
                        error = %error,
                        "AI meal plan generation failed"
                    );
                    return Err(error);
                }
            }
        }
    }
}
