//! Backend configuration from TOML (`[backend]` section)

use serde::{Deserialize, Serialize};

/// Default structured-generation model
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default Generative Language API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Model identifier sent to the backend
    pub model: String,
    /// API base URL
    pub endpoint: String,
    /// Timeout in seconds for one backend call
    pub timeout_seconds: u64,
    /// Environment variables checked for the API key, in order
    pub credential_vars: Vec<String>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 120,
            credential_vars: vec![
                "API_KEY".to_string(),
                "VITE_API_KEY".to_string(),
                "GEMINI_API_KEY".to_string(),
            ],
        }
    }
}
