//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod credentials;
pub mod generation_backend;
pub mod session_observer;
