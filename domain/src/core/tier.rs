//! Access tier

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Access tier of the current user.
///
/// The tier never changes what is requested from the backend. It only gates
/// what the presentation layer may render, and the session never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserTier {
    /// Free tier: premium agents, metrics and shadow mode are locked
    Observer,
    /// Full access
    #[default]
    Commander,
}

impl UserTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserTier::Observer => "observer",
            UserTier::Commander => "commander",
        }
    }

    pub fn can_toggle_dark_mode(&self) -> bool {
        matches!(self, UserTier::Commander)
    }

    pub fn can_view_metrics(&self) -> bool {
        matches!(self, UserTier::Commander)
    }

    pub fn can_view_premium_agents(&self) -> bool {
        matches!(self, UserTier::Commander)
    }
}

impl std::fmt::Display for UserTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "observer" | "guest" => Ok(UserTier::Observer),
            "commander" | "member" => Ok(UserTier::Commander),
            other => Err(DomainError::UnknownTier(other.to_string())),
        }
    }
}
