//! Use cases (application services)
//!
//! - [`orchestrate`]: one council request with retry and validation
//! - [`playback`]: paced reveal of the debate transcript
//! - [`council_session`]: the session controller tying both to the state machine

pub mod council_session;
pub mod orchestrate;
pub mod playback;

#[cfg(test)]
pub(crate) mod testing;
