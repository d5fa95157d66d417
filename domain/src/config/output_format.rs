//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished council sitting is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Debate transcript followed by the verdict (default)
    #[default]
    Full,
    /// Only the verdict
    Verdict,
    /// The raw council result as JSON
    Json,
}

impl OutputFormat {
    /// Whether the debate transcript is part of the output
    pub fn shows_debate(&self) -> bool {
        matches!(self, OutputFormat::Full)
    }
}
