//! Application layer for nexus-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CouncilConfig, RetryPolicy, SessionDefaults};
pub use ports::{
    credentials::{Credential, CredentialProvider, StaticCredential},
    generation_backend::{
        BackendError, FailureKind, GenerationBackend, GenerationRequest, JSON_MIME_TYPE,
    },
    session_observer::{NoObserver, SessionObserver},
};
pub use use_cases::council_session::{CouncilSession, SubmitOutcome};
pub use use_cases::orchestrate::{OrchestrationError, RequestOrchestrator};
pub use use_cases::playback::PlaybackScheduler;
