// ABOUTME: Retry policy with exponential backoff plus injectable delay and clock seams
// ABOUTME: Tokio-backed implementations for production, fixed ones for deterministic tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tokio::time::sleep;

/// Bounded retry with `base^attempt` second delays between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, first attempt included
    pub max_attempts: u32,
    /// Backoff base in seconds
    pub backoff_base_secs: u64,
}

impl RetryPolicy {
    /// Default attempt count
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    /// Default backoff base (2 s, 4 s, 8 s, ...)
    pub const DEFAULT_BACKOFF_BASE_SECS: u64 = 2;

    /// Create a policy
    #[must_use]
    pub const fn new(max_attempts: u32, backoff_base_secs: u64) -> Self {
        Self {
            max_attempts,
            backoff_base_secs,
        }
    }

    /// Delay after the failed attempt numbered `attempt` (1-based)
    #[must_use]
    pub const fn delay_after(&self, attempt: u32) -> Duration {
        Duration::from_secs(self.backoff_base_secs.saturating_pow(attempt))
    }

    /// Whether another attempt follows the attempt numbered `attempt`
    #[must_use]
    pub const fn has_attempt_after(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_BACKOFF_BASE_SECS)
    }
}

/// Suspends the current task between attempts
#[async_trait]
pub trait Delay: Send + Sync {
    /// Wait for `duration`
    async fn wait(&self, duration: Duration);
}

/// Delay backed by `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        sleep(duration).await;
    }
}

/// Source of the plan start date
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Local calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
