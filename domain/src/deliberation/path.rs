//! Strategic path value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The three fixed recommendation archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathId {
    /// High risk, high reward disruption
    Aggressive,
    /// Low risk, steady resilience
    Conservative,
    /// Asymmetric, creative leverage
    Lateral,
}

impl PathId {
    pub const ALL: [PathId; 3] = [PathId::Aggressive, PathId::Conservative, PathId::Lateral];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathId::Aggressive => "aggressive",
            PathId::Conservative => "conservative",
            PathId::Lateral => "lateral",
        }
    }

    /// Nickname used when presenting the paths side by side
    pub fn pill(&self) -> &'static str {
        match self {
            PathId::Aggressive => "The Red Pill",
            PathId::Conservative => "The Blue Pill",
            PathId::Lateral => "The Gold Pill",
        }
    }
}

impl std::fmt::Display for PathId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PathId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggressive" | "1" => Ok(PathId::Aggressive),
            "conservative" | "2" => Ok(PathId::Conservative),
            "lateral" | "3" => Ok(PathId::Lateral),
            other => Err(DomainError::UnknownPath(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Extreme,
    Moderate,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Extreme => "EXTREME",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::Low => "LOW",
        }
    }
}

/// 0-100 scores for the five comparison metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategicMetrics {
    /// Novelty of the approach
    pub innovation: f64,
    /// Danger of failure
    pub risk: f64,
    /// Time to value
    pub speed: f64,
    /// Resource intensity
    pub capital: f64,
    /// Long-term survival chance
    pub resilience: f64,
}

impl StrategicMetrics {
    /// Named scores in display order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("innovation", self.innovation),
            ("risk", self.risk),
            ("speed", self.speed),
            ("capital", self.capital),
            ("resilience", self.resilience),
        ]
    }

    /// Clamp every score into 0-100
    pub fn clamped(self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) };
        Self {
            innovation: clamp(self.innovation),
            risk: clamp(self.risk),
            speed: clamp(self.speed),
            capital: clamp(self.capital),
            resilience: clamp(self.resilience),
        }
    }
}

/// Attributed mental model backing a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreModel {
    pub author: String,
    pub text: String,
}

/// One of the three recommended courses of action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicPath {
    pub id: PathId,
    pub title: String,
    /// Must resolve to a registered agent
    pub lead_agent_id: String,
    pub description: String,
    pub risk_level: RiskLevel,
    pub upside: String,
    pub metrics: StrategicMetrics,
    pub steps: Vec<String>,
    pub code: CoreModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_id_parse() {
        assert_eq!("Lateral".parse::<PathId>().unwrap(), PathId::Lateral);
        assert_eq!("1".parse::<PathId>().unwrap(), PathId::Aggressive);
        assert!("sideways".parse::<PathId>().is_err());
    }

    #[test]
    fn test_path_id_serde() {
        let json = serde_json::to_string(&PathId::Conservative).unwrap();
        assert_eq!(json, "\"conservative\"");
        let risk: RiskLevel = serde_json::from_str("\"EXTREME\"").unwrap();
        assert_eq!(risk, RiskLevel::Extreme);
    }

    #[test]
    fn test_metrics_clamped() {
        let metrics = StrategicMetrics {
            innovation: 140.0,
            risk: -5.0,
            speed: 55.5,
            capital: f64::NAN,
            resilience: 100.0,
        }
        .clamped();
        assert_eq!(metrics.innovation, 100.0);
        assert_eq!(metrics.risk, 0.0);
        assert_eq!(metrics.speed, 55.5);
        assert_eq!(metrics.capital, 0.0);
        assert_eq!(metrics.resilience, 100.0);
    }
}
