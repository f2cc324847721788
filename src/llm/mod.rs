// ABOUTME: LLM provider abstraction for the AI-backed meal plan generator
// ABOUTME: Defines the completion contract implemented by Gemini and by test doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # LLM Provider Interface
//!
//! The generator only needs one thing from a text-completion service: send a
//! prompt, get text back. Everything provider-specific (URLs, payload shapes,
//! safety settings) stays behind [`LlmProvider`].
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use sofra::llm::{ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new("Haftalık menü öner").with_temperature(0.7);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::GeminiProvider;
pub use prompts::build_meal_plan_prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Prompt sent as a single user turn
    pub prompt: String,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Top-k sampling
    pub top_k: Option<u32>,
    /// Nucleus sampling
    pub top_p: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new request for a prompt
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: None,
            top_k: None,
            top_p: None,
            max_tokens: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set top-k and top-p sampling
    #[must_use]
    pub const fn with_sampling(mut self, top_k: u32, top_p: f32) -> Self {
        self.top_k = Some(top_k);
        self.top_p = Some(top_p);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from a completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Text-completion provider
///
/// Errors from `complete` must carry a retryable code for transport-level
/// failures so the generator can back off and try again.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini"), recorded on generation spans
    fn name(&self) -> &'static str;

    /// Perform a completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
