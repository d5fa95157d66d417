//! Domain layer for nexus-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A fixed roster of persona agents deliberates over one dilemma in a single
//! backend call:
//!
//! - **Debate**: an ordered transcript of agent turns, revealed one at a time
//! - **Verdict**: a diagnosis, a 4-row conflict matrix and exactly three
//!   strategic paths (aggressive, conservative, lateral)
//!
//! ## Session
//!
//! `confessional → debate → verdict`, with every asynchronous effect tagged
//! by a [`Generation`] so that a reset or a newer request discards it.

pub mod agent;
pub mod catalog;
pub mod config;
pub mod contract;
pub mod core;
pub mod deliberation;
pub mod playback;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use agent::{AgentProfile, AgentRegistry, CognitiveProfile, Cluster, OceanProfile, ReasoningStyle};
pub use config::OutputFormat;
pub use contract::{ContractError, MATRIX_ROWS, ResponseContract};
pub use core::{error::DomainError, language::Language, tier::UserTier};
pub use deliberation::{
    ConflictDimension, CoreModel, CouncilResult, DebateMessage, PathId, RiskLevel,
    StrategicMetrics, StrategicPath, Verdict,
};
pub use playback::RevealTiming;
pub use prompt::{ComposedPrompt, DeliberationMode, PromptComposer, PromptTemplate, output_schema};
pub use session::{
    ErrorKind, Generation, SessionError, SessionFault, SessionState, Stage, SubmitTicket,
};
