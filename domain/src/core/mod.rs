//! Core domain concepts shared across all subdomains.
//!
//! - [`language::Language`]: output language requested from the backend
//! - [`tier::UserTier`]: read-only access tier consumed by rendering
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod language;
pub mod tier;
