//! Session stages and generations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level stage of a council session.
///
/// Stages are ordered: `Confessional < Debate < Verdict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Collecting the dilemma (and waiting for the council while loading)
    #[default]
    Confessional,
    /// Revealing the debate transcript
    Debate,
    /// Presenting the verdict, path index or path detail
    Verdict,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Confessional => "confessional",
            Stage::Debate => "debate",
            Stage::Verdict => "verdict",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Epoch of a session's transcript.
///
/// Bumped on every submit and every reset. Asynchronous work (requests,
/// reveal timers) is tagged with the generation it started under and is
/// discarded if the session has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert!(Stage::Confessional < Stage::Debate);
        assert!(Stage::Debate < Stage::Verdict);
    }

    #[test]
    fn test_generation_next() {
        let g = Generation::default();
        assert_eq!(g.value(), 0);
        assert_eq!(g.next().value(), 1);
        assert_ne!(g, g.next());
        assert_eq!(g.next().to_string(), "#1");
    }
}
