//! Presentation layer for nexus-council
//!
//! This crate contains CLI definitions, output formatters,
//! progress observers, and the interactive council REPL.

pub mod cli;
pub mod council;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use council::CouncilRepl;
pub use output::console::ConsoleFormatter;
pub use output::labels::Labels;
pub use progress::reporter::{ConsoleObserver, SimpleObserver};
