//! Generation backend port
//!
//! Defines the interface for the structured-generation model service.

use super::credentials::Credential;
use async_trait::async_trait;
use council_domain::{ComposedPrompt, DeliberationMode};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// MIME type requested for every council response
pub const JSON_MIME_TYPE: &str = "application/json";

/// Classification of a backend failure.
///
/// Adapters classify from structured transport information (status codes,
/// connection errors), never from message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The service reported itself overloaded or unavailable (HTTP 503)
    ServiceUnavailable,
    /// The request was throttled (HTTP 429)
    RateLimited,
    /// The request never completed: connection refused, reset, timed out
    Network,
    /// Anything else, including authentication and malformed requests
    Other,
}

impl FailureKind {
    /// Whether a call failing this way is worth repeating
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FailureKind::ServiceUnavailable | FailureKind::RateLimited | FailureKind::Network
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ServiceUnavailable => "service unavailable",
            FailureKind::RateLimited => "rate limited",
            FailureKind::Network => "network",
            FailureKind::Other => "other",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed backend call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ServiceUnavailable, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(FailureKind::RateLimited, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Other, message)
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// One structured-generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub mode: DeliberationMode,
    pub system_instruction: String,
    pub user_prompt: String,
    pub response_schema: Value,
    pub response_mime_type: &'static str,
}

impl From<ComposedPrompt> for GenerationRequest {
    fn from(prompt: ComposedPrompt) -> Self {
        Self {
            mode: prompt.mode,
            system_instruction: prompt.system_instruction,
            user_prompt: prompt.user_prompt,
            response_schema: prompt.output_schema,
            response_mime_type: JSON_MIME_TYPE,
        }
    }
}

impl From<&ComposedPrompt> for GenerationRequest {
    fn from(prompt: &ComposedPrompt) -> Self {
        Self::from(prompt.clone())
    }
}

/// Backend capable of producing a schema-constrained JSON document.
///
/// This port defines how the application layer talks to the model service.
/// Implementations (adapters) live in the infrastructure layer. A call
/// returns the raw text payload on success; checking its shape is the
/// caller's job.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
        credential: &Credential,
    ) -> Result<String, BackendError>;
}
