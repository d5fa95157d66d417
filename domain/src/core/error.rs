//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown strategic path: {0}")]
    UnknownPath(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Unknown tier: {0}")]
    UnknownTier(String),
}
