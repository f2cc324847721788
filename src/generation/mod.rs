// ABOUTME: AI-backed meal plan generation: retry primitives, response parsing, and the generator
// ABOUTME: Turns a profile and calorie target into a validated seven-day plan plus new recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # AI Plan Generation
//!
//! One attempt is `Requesting -> Succeeded | Failed`. Attempts run inside a
//! bounded loop owned by [`AiPlanGenerator`]; retryable failures wait
//! `base^attempt` seconds on the injected [`Delay`] before the next attempt.

/// Generator orchestrating prompt, completion, parsing and retries
pub mod ai_generator;
/// Code-fence stripping and structural validation of the AI payload
pub mod response;
/// Retry policy, delay and clock seams
pub mod retry;

pub use ai_generator::{AiGeneratedPlan, AiPlanGenerator};
pub use response::{parse_meal_plan_response, strip_code_fences, ParsedMealPlan};
pub use retry::{Clock, Delay, FixedClock, RetryPolicy, SystemClock, TokioDelay};
