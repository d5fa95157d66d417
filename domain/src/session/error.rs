//! Session errors

use super::stage::{Generation, Stage};
use crate::deliberation::PathId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind tag attached to a failure surfaced to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No credential could be resolved; fatal configuration error
    MissingCredential,
    /// The backend reported a failure that is not worth retrying
    Unretryable,
    /// Transient failures persisted through every retry
    Exhausted,
    /// The backend answered but the payload broke the response contract
    MalformedResponse,
    /// The request was cancelled
    Cancelled,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingCredential => "missing_credential",
            ErrorKind::Unretryable => "unretryable",
            ErrorKind::Exhausted => "exhausted",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A terminal failure held by the session until dismissed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFault {
    pub kind: ErrorKind,
    pub message: String,
}

impl SessionFault {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A transition the session state machine refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("A council request is already in flight")]
    Busy,

    #[error("Nothing to submit: the query is empty")]
    EmptyQuery,

    #[error("No verdict to follow up on")]
    NoVerdict,

    #[error("Not allowed in the {actual} stage (requires {expected})")]
    WrongStage { expected: Stage, actual: Stage },

    #[error("Stale update from generation {got} (session is at {current})")]
    Stale { got: Generation, current: Generation },

    #[error("The debate is still being revealed")]
    RevealIncomplete,

    #[error("Verdict has no '{0}' path")]
    UnknownPath(PathId),

    #[error("No strategic path is selected")]
    NoPathSelected,

    #[error("Step {index} is out of range ({len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    #[error("{0} is locked for the current tier")]
    TierLocked(&'static str),

    #[error("Session invariant violated: {0}")]
    InvariantViolated(String),
}

impl SessionError {
    /// Whether this error only reports a discarded stale update
    pub fn is_stale(&self) -> bool {
        matches!(self, SessionError::Stale { .. })
    }
}
