//! Retry Policy Module
//!
//! Bounded exponential backoff for rate-limited upstream calls.

use std::time::Duration;

use serde::Deserialize;

// == Retry Policy ==
/// How often and how long to back off after a 429.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry in milliseconds
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// Returns the delay before retry number `retry` (0-based), or `None`
    /// once the budget is spent.
    pub fn delay_for(&self, retry: u32) -> Option<Duration> {
        if retry >= self.max_retries {
            return None;
        }

        let factor = 2u64.saturating_pow(retry);
        Some(Duration::from_millis(self.base_delay_ms.saturating_mul(factor)))
    }

    /// Total attempts including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}
