//! Deliberation domain
//!
//! The outcome of one council sitting: the debate transcript and the
//! structured verdict with its three strategic paths.

pub mod entities;
pub mod path;

pub use entities::{ConflictDimension, CouncilResult, DebateMessage, Verdict};
pub use path::{CoreModel, PathId, RiskLevel, StrategicMetrics, StrategicPath};
