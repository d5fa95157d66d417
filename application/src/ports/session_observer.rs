//! Session observer port
//!
//! Defines the callbacks through which a running council session reports
//! progress to the presentation layer.

use council_domain::{DebateMessage, ErrorKind, Generation, Stage};

/// Callback for session progress
///
/// Implementations live in the presentation layer and can display progress
/// in various ways (console, web UI, etc.). Every callback is invoked
/// without the session lock held.
pub trait SessionObserver: Send + Sync {
    /// A council request started (`true`) or settled (`false`)
    fn on_loading(&self, _loading: bool) {}

    /// A new transcript replaced the previous one
    fn on_transcript_ready(&self, _generation: Generation, _messages: usize) {}

    /// Message `index` of the current transcript became visible
    fn on_reveal(&self, _index: usize, _message: &DebateMessage) {}

    /// The whole transcript is visible; the verdict may be opened
    fn on_reveal_complete(&self, _generation: Generation) {}

    fn on_stage_change(&self, _stage: Stage) {}

    /// A council request failed for good
    fn on_error(&self, _kind: ErrorKind, _message: &str) {}
}

/// No-op observer for when progress reporting is not needed
pub struct NoObserver;

impl SessionObserver for NoObserver {}
