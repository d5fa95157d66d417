//! Retry policy for backend calls.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exponential backoff without jitter.
///
/// The first call is not a retry: with `max_retries = 3` the backend is
/// called at most four times, waiting `base`, `2 × base`, `4 × base` between
/// consecutive calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first call
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds
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
    pub fn new(max_retries: u32, base_delay_ms: u64) -> Self {
        Self {
            max_retries,
            base_delay_ms,
        }
    }

    /// Total number of backend calls this policy allows
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before retry number `retry` (0-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1u64 << retry.min(16);
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 4);
        assert_eq!(policy.delay_for(0), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(1), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(4000));
    }

    #[test]
    fn test_large_retry_index_saturates() {
        let policy = RetryPolicy::new(100, u64::MAX / 2);
        assert_eq!(policy.delay_for(64), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_zero_retries_allows_one_call() {
        assert_eq!(RetryPolicy::new(0, 1000).max_attempts(), 1);
    }
}
