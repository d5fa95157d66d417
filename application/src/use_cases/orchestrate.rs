//! Request orchestration use case
//!
//! Sends one composed prompt to the generation backend, retries transient
//! failures with exponential backoff, and validates the payload.

use crate::config::RetryPolicy;
use crate::ports::credentials::CredentialProvider;
use crate::ports::generation_backend::{BackendError, GenerationBackend, GenerationRequest};
use council_domain::{ComposedPrompt, ContractError, CouncilResult, ErrorKind, ResponseContract};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Terminal outcome of a failed council request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrchestrationError {
    #[error("No API key found: {hint}")]
    MissingCredential { hint: String },

    #[error("The council could not be reached: {0}")]
    Unretryable(BackendError),

    #[error("The council is unavailable after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: BackendError },

    #[error("The council answered out of form: {0}")]
    Malformed(#[from] ContractError),

    #[error("The request was cancelled")]
    Cancelled,
}

impl OrchestrationError {
    /// Tag used to surface this failure to the user
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrchestrationError::MissingCredential { .. } => ErrorKind::MissingCredential,
            OrchestrationError::Unretryable(_) => ErrorKind::Unretryable,
            OrchestrationError::Exhausted { .. } => ErrorKind::Exhausted,
            OrchestrationError::Malformed(_) => ErrorKind::MalformedResponse,
            OrchestrationError::Cancelled => ErrorKind::Cancelled,
        }
    }
}

/// Use case for running one council request against the backend
pub struct RequestOrchestrator {
    backend: Arc<dyn GenerationBackend>,
    credentials: Arc<dyn CredentialProvider>,
    policy: RetryPolicy,
}

impl RequestOrchestrator {
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        credentials: Arc<dyn CredentialProvider>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            backend,
            credentials,
            policy,
        }
    }

    /// Execute the request.
    ///
    /// The credential is resolved before the first call. Only failures the
    /// backend classifies as transient are retried; a payload that breaks
    /// the response contract is returned as `Malformed` straight away.
    pub async fn execute(
        &self,
        prompt: &ComposedPrompt,
        cancel: &CancellationToken,
    ) -> Result<CouncilResult, OrchestrationError> {
        let credential =
            self.credentials
                .resolve()
                .ok_or_else(|| OrchestrationError::MissingCredential {
                    hint: self.credentials.hint(),
                })?;

        let request = GenerationRequest::from(prompt);
        info!(mode = request.mode.as_str(), "Summoning the council");
        debug!(
            system_chars = request.system_instruction.len(),
            user_chars = request.user_prompt.len(),
            "Composed request"
        );

        let mut retry = 0u32;
        loop {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(OrchestrationError::Cancelled),
                outcome = self.backend.generate(&request, &credential) => outcome,
            };

            let err = match outcome {
                Ok(raw) => {
                    let result = ResponseContract::validate(&raw)?;
                    info!(
                        attempts = retry + 1,
                        messages = result.debate.len(),
                        "Council responded"
                    );
                    return Ok(result);
                }
                Err(err) => err,
            };

            if !err.is_retryable() {
                return Err(OrchestrationError::Unretryable(err));
            }
            if retry + 1 >= self.policy.max_attempts() {
                return Err(OrchestrationError::Exhausted {
                    attempts: retry + 1,
                    last: err,
                });
            }

            let delay = self.policy.delay_for(retry);
            retry += 1;
            warn!(
                attempt = retry,
                max_attempts = self.policy.max_attempts(),
                delay_ms = delay.as_millis() as u64,
                cause = %err,
                "Council busy, retrying"
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(OrchestrationError::Cancelled),
                _ = sleep(delay) => {}
            }
        }
    }
}
