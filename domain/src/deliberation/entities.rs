//! Transcript and verdict entities

use super::path::{PathId, StrategicPath};
use serde::{Deserialize, Serialize};

/// One turn of the simulated debate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateMessage {
    pub agent_id: String,
    pub content: String,
}

impl DebateMessage {
    pub fn new(agent_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            content: content.into(),
        }
    }
}

/// A row of the path comparison table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDimension {
    pub dimension: String,
    pub aggressive: String,
    pub conservative: String,
    pub lateral: String,
}

impl ConflictDimension {
    /// Stance of the given path on this dimension
    pub fn stance(&self, path: PathId) -> &str {
        match path {
            PathId::Aggressive => &self.aggressive,
            PathId::Conservative => &self.conservative,
            PathId::Lateral => &self.lateral,
        }
    }
}

/// Structured strategic recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub diagnosis: String,
    pub conflict_resolution: String,
    pub is_dark_verdict: bool,
    pub matrix: Vec<ConflictDimension>,
    pub paths: Vec<StrategicPath>,
}

impl Verdict {
    pub fn path(&self, id: PathId) -> Option<&StrategicPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    pub fn has_path(&self, id: PathId) -> bool {
        self.path(id).is_some()
    }
}

/// A validated backend result: transcript plus verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouncilResult {
    pub debate: Vec<DebateMessage>,
    pub verdict: Verdict,
}
