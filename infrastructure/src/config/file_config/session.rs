//! Session configuration from TOML (`[session]` section)

use council_application::SessionDefaults;
use council_domain::{Language, UserTier};
use serde::{Deserialize, Serialize};

/// Raw session preferences from TOML
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// `zh-TW` or `en`
    pub language: Language,
    /// Request shadow-mode verdicts
    pub dark_mode: bool,
    /// `observer` or `commander`
    pub tier: UserTier,
}

impl FileSessionConfig {
    pub fn to_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            language: self.language,
            dark_mode: self.dark_mode,
            tier: self.tier,
        }
    }
}
