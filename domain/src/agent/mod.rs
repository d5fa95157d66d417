//! Agent domain
//!
//! The council is a fixed roster of persona agents. Each agent is plain
//! immutable data: identity, a psychometric kernel and a character directive.
//! Behaviour differences come entirely from attribute values consumed by the
//! prompt composer.

pub mod profile;
pub mod registry;

pub use profile::{AgentProfile, CognitiveProfile, Cluster, OceanProfile, ReasoningStyle};
pub use registry::AgentRegistry;
