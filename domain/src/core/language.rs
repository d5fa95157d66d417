//! Output language selector

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Language the council is asked to answer in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Traditional Chinese (Taiwan)
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    /// English
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::ZhTw => "zh-TW",
            Language::En => "en",
        }
    }

    /// The other supported language
    pub fn toggled(self) -> Self {
        match self {
            Language::ZhTw => Language::En,
            Language::En => Language::ZhTw,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zh-tw" | "zh_tw" | "zh" => Ok(Language::ZhTw),
            "en" | "en-us" | "english" => Ok(Language::En),
            other => Err(DomainError::UnsupportedLanguage(other.to_string())),
        }
    }
}
