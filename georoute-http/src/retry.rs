//! Retry policy for query-limit (HTTP 429) responses.

use std::time::Duration;

const BASE_DELAY: Duration = Duration::from_millis(100);
const MAX_DELAY: Duration = Duration::from_secs(10);
const TOO_MANY_REQUESTS: u16 = 429;

/// Decides whether a failed attempt is retried and how long to wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RetryPolicy {
    enabled: bool,
    max_retries: u32,
}

impl RetryPolicy {
    pub(crate) const fn new(enabled: bool, max_retries: u32) -> Self {
        Self {
            enabled,
            max_retries,
        }
    }

    /// Whether a response with `status` after `retries_so_far` retries should
    /// be attempted again.
    pub(crate) const fn should_retry(&self, status: Option<u16>, retries_so_far: u32) -> bool {
        self.enabled
            && retries_so_far < self.max_retries
            && matches!(status, Some(TOO_MANY_REQUESTS))
    }

    /// Exponential delay before retry number `retries_so_far + 1`.
    pub(crate) fn delay(retries_so_far: u32) -> Duration {
        let factor = 1_u32.checked_shl(retries_so_far).unwrap_or(u32::MAX);
        BASE_DELAY.saturating_mul(factor).min(MAX_DELAY)
    }
}
