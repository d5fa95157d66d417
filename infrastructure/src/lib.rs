//! Infrastructure layer for nexus-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FilePlaybackConfig, FileReplConfig, FileRetryConfig, FileSessionConfig,
};
pub use credentials::EnvCredentialProvider;
pub use gemini::{GeminiBackend, classify_status};
