//! Session domain.
//!
//! - [`stage::Stage`]: confessional → debate → verdict lifecycle
//! - [`state::SessionState`]: the explicit session state machine
//! - [`error::SessionError`]: rejected transitions
//! - [`error::SessionFault`]: a surfaced orchestration failure

pub mod error;
pub mod stage;
pub mod state;

pub use error::{ErrorKind, SessionError, SessionFault};
pub use stage::{Generation, Stage};
pub use state::{SessionState, SubmitTicket};
