//! Agent profile value objects

use crate::core::language::Language;
use crate::core::tier::UserTier;
use serde::Serialize;

/// Grouping of agents on the council roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cluster {
    /// Classical strategists
    A,
    /// Visionaries and builders of the new
    B,
    /// Operators and contrarians
    C,
    /// Investors and risk thinkers
    D,
    /// Philosophers and connectors
    E,
}

/// Big Five personality dimensions, each normalized to 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OceanProfile {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

/// Fixed psychometric kernel of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CognitiveProfile {
    /// 0 = conservative, 100 = reckless
    pub risk_tolerance: u8,
    /// Planning horizon in years
    pub time_horizon_years: u8,
    /// 0 = deliberate, 100 = instant
    pub decision_speed: u8,
    /// Dominant cognitive bias
    pub bias: &'static str,
    pub ocean: OceanProfile,
    /// System 1 vs System 2 rating: 0 = pure intuition, 100 = pure logic
    pub intuition_logic: u8,
    /// Authoritative source the agent's reasoning is grounded on
    pub bio_source: &'static str,
}

/// Coarse reading of the intuition/logic score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasoningStyle {
    /// Speaks from vision and emotion (score below 30)
    Intuitive,
    Balanced,
    /// Speaks from calculation and precedent (score above 80)
    Analytical,
}

impl ReasoningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningStyle::Intuitive => "intuitive",
            ReasoningStyle::Balanced => "balanced",
            ReasoningStyle::Analytical => "analytical",
        }
    }
}

/// A council persona (immutable, loaded once)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentProfile {
    /// Stable identifier referenced by debate messages and strategic paths
    pub id: &'static str,
    pub name: &'static str,
    pub name_zh: &'static str,
    pub title: &'static str,
    pub title_zh: &'static str,
    pub cluster: Cluster,
    /// One-line guiding principle
    pub motto: &'static str,
    pub experience: &'static str,
    /// Free-text character directive passed to the backend verbatim
    pub character_prompt: &'static str,
    pub is_premium: bool,
    pub profile: CognitiveProfile,
}

impl AgentProfile {
    pub fn display_name(&self, language: Language) -> &'static str {
        match language {
            Language::ZhTw => self.name_zh,
            Language::En => self.name,
        }
    }

    pub fn display_title(&self, language: Language) -> &'static str {
        match language {
            Language::ZhTw => self.title_zh,
            Language::En => self.title,
        }
    }

    /// Whether the agent's details are hidden for the given tier
    pub fn is_locked_for(&self, tier: UserTier) -> bool {
        self.is_premium && !tier.can_view_premium_agents()
    }

    pub fn reasoning_style(&self) -> ReasoningStyle {
        match self.profile.intuition_logic {
            0..30 => ReasoningStyle::Intuitive,
            30..=80 => ReasoningStyle::Balanced,
            _ => ReasoningStyle::Analytical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::registry::AgentRegistry;

    #[test]
    fn test_reasoning_style_thresholds() {
        let jobs = AgentRegistry::get("jobs").unwrap();
        assert_eq!(jobs.reasoning_style(), ReasoningStyle::Intuitive);

        let munger = AgentRegistry::get("munger").unwrap();
        assert_eq!(munger.reasoning_style(), ReasoningStyle::Analytical);

        let musk = AgentRegistry::get("musk").unwrap();
        assert_eq!(musk.reasoning_style(), ReasoningStyle::Balanced);
    }

    #[test]
    fn test_premium_lock() {
        let jobs = AgentRegistry::get("jobs").unwrap();
        assert!(jobs.is_locked_for(UserTier::Observer));
        assert!(!jobs.is_locked_for(UserTier::Commander));

        let suntzu = AgentRegistry::get("suntzu").unwrap();
        assert!(!suntzu.is_locked_for(UserTier::Observer));
    }

    #[test]
    fn test_display_name_by_language() {
        let buffett = AgentRegistry::get("buffett").unwrap();
        assert_eq!(buffett.display_name(Language::En), "Warren Buffett");
        assert_eq!(buffett.display_name(Language::ZhTw), "華倫·巴菲特");
    }
}
