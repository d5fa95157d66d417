//! Retry configuration from TOML (`[retry]` section)

use council_application::RetryPolicy;
use serde::{Deserialize, Serialize};

/// Raw retry configuration from TOML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Retries after the first call
    pub max_retries: u32,
    /// Delay before the first retry; doubles for each further retry
    pub base_delay_ms: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            base_delay_ms: policy.base_delay_ms,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.base_delay_ms)
    }
}
