//! Reveal delay computation

use crate::deliberation::DebateMessage;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reading-time model for the staged reveal.
///
/// `delay = max(floor, base + chars * per_char)` milliseconds, where `chars`
/// counts Unicode scalar values of the message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    pub floor_ms: u64,
    pub base_ms: u64,
    pub per_char_ms: u64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            floor_ms: 1500,
            base_ms: 1000,
            per_char_ms: 20,
        }
    }
}

impl RevealTiming {
    pub fn delay_for_len(&self, content_len: usize) -> Duration {
        let proportional = self
            .base_ms
            .saturating_add((content_len as u64).saturating_mul(self.per_char_ms));
        Duration::from_millis(proportional.max(self.floor_ms))
    }

    pub fn delay_for(&self, content: &str) -> Duration {
        self.delay_for_len(content.chars().count())
    }

    /// Delay to wait after revealing `message` before advancing
    pub fn delay_after(&self, message: &DebateMessage) -> Duration {
        self.delay_for(&message.content)
    }
}
