//! Gemini adapter for the generation backend port

mod backend;
mod types;

pub use backend::{GeminiBackend, classify_status};
