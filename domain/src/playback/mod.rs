//! Playback timing
//!
//! How long each debate turn stays on screen before the next one is revealed.

mod timing;

pub use timing::RevealTiming;
