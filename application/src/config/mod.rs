//! Application-level configuration.
//!
//! - [`RetryPolicy`]: backoff schedule for backend calls
//! - [`CouncilConfig`]: everything the session controller is built from

pub mod council_config;
pub mod retry_policy;

pub use council_config::{CouncilConfig, SessionDefaults};
pub use retry_policy::RetryPolicy;
