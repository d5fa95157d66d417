//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod output;
mod playback;
mod repl;
mod retry;
mod session;

pub use backend::{DEFAULT_ENDPOINT, DEFAULT_MODEL, FileBackendConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use playback::FilePlaybackConfig;
pub use repl::FileReplConfig;
pub use retry::FileRetryConfig;
pub use session::FileSessionConfig;

use council_application::CouncilConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("backend.model cannot be empty")]
    EmptyModelName,

    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("backend.credential_vars must name at least one variable")]
    NoCredentialVars,

    #[error("retry.base_delay_ms cannot be 0")]
    ZeroBaseDelay,

    #[error("playback.floor_ms cannot be 0")]
    ZeroRevealFloor,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation backend settings
    pub backend: FileBackendConfig,
    /// Backoff for transient backend failures
    pub retry: FileRetryConfig,
    /// Debate reveal pacing
    pub playback: FilePlaybackConfig,
    /// Initial session preferences
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.backend.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.backend.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.backend.credential_vars.iter().all(|v| v.trim().is_empty()) {
            issues.push(ConfigValidationError::NoCredentialVars);
        }
        if self.retry.base_delay_ms == 0 {
            issues.push(ConfigValidationError::ZeroBaseDelay);
        }
        if self.playback.floor_ms == 0 {
            issues.push(ConfigValidationError::ZeroRevealFloor);
        }

        issues
    }

    /// Application configuration built from the file settings
    pub fn to_council_config(&self) -> CouncilConfig {
        CouncilConfig::new(
            self.retry.to_policy(),
            self.playback.to_timing(),
            self.session.to_defaults(),
        )
        .with_playback(self.playback.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{Language, UserTier};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
model = "gemini-2.5-flash"
timeout_seconds = 30
credential_vars = ["COUNCIL_KEY"]

[retry]
max_retries = 5
base_delay_ms = 250

[playback]
enabled = false
floor_ms = 500

[session]
language = "en"
dark_mode = true
tier = "observer"

[output]
format = "json"
color = false

[repl]
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.model, "gemini-2.5-flash");
        assert_eq!(config.backend.credential_vars, vec!["COUNCIL_KEY".to_string()]);
        assert_eq!(config.retry.max_retries, 5);
        assert!(!config.playback.enabled);
        assert_eq!(config.playback.floor_ms, 500);
        assert_eq!(config.playback.base_ms, 1000);
        assert_eq!(config.session.language, Language::En);
        assert!(config.session.dark_mode);
        assert_eq!(config.session.tier, UserTier::Observer);
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.backend.model, DEFAULT_MODEL);
        assert_eq!(config.backend.timeout_seconds, 120);
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.retry.base_delay_ms, 1000);
        assert_eq!(config.playback.floor_ms, 1500);
        assert_eq!(config.session.language, Language::ZhTw);
        assert_eq!(config.session.tier, UserTier::Commander);
        assert!(config.playback.enabled);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.backend.model = " ".to_string();
        config.retry.base_delay_ms = 0;
        config.playback.floor_ms = 0;

        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::EmptyModelName,
                ConfigValidationError::ZeroBaseDelay,
                ConfigValidationError::ZeroRevealFloor
            ]
        );
    }

    #[test]
    fn test_to_council_config() {
        let mut config = FileConfig::default();
        config.retry.max_retries = 1;
        config.playback.enabled = false;
        config.session.language = Language::En;

        let council = config.to_council_config();
        assert_eq!(council.retry().max_attempts(), 2);
        assert!(!council.playback());
        assert_eq!(council.defaults().language, Language::En);
    }
}
