//! Playback configuration from TOML (`[playback]` section)

use council_domain::RevealTiming;
use serde::{Deserialize, Serialize};

/// Raw playback configuration from TOML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePlaybackConfig {
    /// Reveal the debate on a timer (`false` prints it all at once)
    pub enabled: bool,
    /// Minimum time a turn stays on screen
    pub floor_ms: u64,
    /// Fixed part of a turn's reading time
    pub base_ms: u64,
    /// Reading time per character
    pub per_char_ms: u64,
}

impl Default for FilePlaybackConfig {
    fn default() -> Self {
        let timing = RevealTiming::default();
        Self {
            enabled: true,
            floor_ms: timing.floor_ms,
            base_ms: timing.base_ms,
            per_char_ms: timing.per_char_ms,
        }
    }
}

impl FilePlaybackConfig {
    pub fn to_timing(&self) -> RevealTiming {
        RevealTiming {
            floor_ms: self.floor_ms,
            base_ms: self.base_ms,
            per_char_ms: self.per_char_ms,
        }
    }
}
