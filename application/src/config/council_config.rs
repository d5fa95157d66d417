//! Council configuration container.
//!
//! [`CouncilConfig`] groups the settings the session controller needs:
//! how requests are retried, how the debate is paced, and the initial
//! session preferences.

use super::RetryPolicy;
use council_domain::{Language, RevealTiming, SessionState, UserTier};

/// Initial preferences of a new session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionDefaults {
    pub language: Language,
    pub dark_mode: bool,
    pub tier: UserTier,
}

/// Configuration container for the council session.
#[derive(Debug, Clone)]
pub struct CouncilConfig {
    retry: RetryPolicy,
    timing: RevealTiming,
    defaults: SessionDefaults,
    playback: bool,
}

impl Default for CouncilConfig {
    fn default() -> Self {
        Self::new(
            RetryPolicy::default(),
            RevealTiming::default(),
            SessionDefaults::default(),
        )
    }
}

impl CouncilConfig {
    pub fn new(retry: RetryPolicy, timing: RevealTiming, defaults: SessionDefaults) -> Self {
        Self {
            retry,
            timing,
            defaults,
            playback: true,
        }
    }

    // ==================== Accessors ====================

    pub fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn timing(&self) -> &RevealTiming {
        &self.timing
    }

    pub fn defaults(&self) -> &SessionDefaults {
        &self.defaults
    }

    /// Whether debate turns are revealed on a timer (otherwise all at once)
    pub fn playback(&self) -> bool {
        self.playback
    }

    // ==================== Builder Methods ====================

    pub fn with_playback(mut self, enabled: bool) -> Self {
        self.playback = enabled;
        self
    }

    pub fn with_defaults(mut self, defaults: SessionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    // ==================== Factory Methods ====================

    /// Fresh session state seeded with the configured preferences
    pub fn initial_state(&self) -> SessionState {
        SessionState::new(
            self.defaults.language,
            self.defaults.dark_mode,
            self.defaults.tier,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::Stage;

    #[test]
    fn test_default_config() {
        let config = CouncilConfig::default();
        assert_eq!(config.retry().max_retries, 3);
        assert_eq!(config.timing().floor_ms, 1500);
        assert!(config.playback());
        assert!(!config.with_playback(false).playback());
    }

    #[test]
    fn test_initial_state_uses_defaults() {
        let config = CouncilConfig::new(
            RetryPolicy::default(),
            RevealTiming::default(),
            SessionDefaults {
                language: Language::En,
                dark_mode: true,
                tier: UserTier::Observer,
            },
        );
        let state = config.initial_state();
        assert_eq!(state.stage(), Stage::Confessional);
        assert_eq!(state.language(), Language::En);
        assert!(state.dark_mode());
        assert_eq!(state.tier(), UserTier::Observer);
    }
}
