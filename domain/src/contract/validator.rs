//! Response contract validator

use crate::agent::AgentRegistry;
use crate::deliberation::{CouncilResult, PathId};
use thiserror::Error;
use tracing::debug;

/// Number of rows the comparison matrix must have
pub const MATRIX_ROWS: usize = 4;

/// Reasons a backend payload is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("Response is not valid council JSON: {0}")]
    Parse(String),

    #[error("Expected exactly 3 strategic paths, got {0}")]
    PathCount(usize),

    #[error("Strategic path '{0}' is missing")]
    MissingPath(PathId),

    #[error("Path '{path}' is led by unknown agent '{agent_id}'")]
    UnknownLeadAgent { path: PathId, agent_id: String },

    #[error("Expected {MATRIX_ROWS} matrix rows, got {0}")]
    MatrixRows(usize),
}

/// Enforces the council response contract
pub struct ResponseContract;

impl ResponseContract {
    /// Parse and validate a raw backend payload.
    ///
    /// Metric scores are clamped into 0-100 rather than rejected.
    pub fn validate(raw: &str) -> Result<CouncilResult, ContractError> {
        let mut result: CouncilResult =
            serde_json::from_str(raw).map_err(|e| ContractError::Parse(e.to_string()))?;

        let verdict = &mut result.verdict;

        for id in PathId::ALL {
            if !verdict.has_path(id) {
                return Err(ContractError::MissingPath(id));
            }
        }

        // All three ids are present, so any extra entry is a duplicate.
        if verdict.paths.len() != PathId::ALL.len() {
            return Err(ContractError::PathCount(verdict.paths.len()));
        }

        for path in &verdict.paths {
            if !AgentRegistry::contains(&path.lead_agent_id) {
                return Err(ContractError::UnknownLeadAgent {
                    path: path.id,
                    agent_id: path.lead_agent_id.clone(),
                });
            }
        }

        if verdict.matrix.len() != MATRIX_ROWS {
            return Err(ContractError::MatrixRows(verdict.matrix.len()));
        }

        for path in &mut verdict.paths {
            path.metrics = path.metrics.clamped();
        }

        debug!(
            messages = result.debate.len(),
            dark = result.verdict.is_dark_verdict,
            "Council response passed contract validation"
        );

        Ok(result)
    }
}
