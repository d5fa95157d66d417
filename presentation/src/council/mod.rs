//! Interactive council module
//!
//! Provides a readline-based interactive interface for a council session.

mod repl;

pub use repl::CouncilRepl;
