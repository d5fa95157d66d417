//! Playback scheduling use case
//!
//! Reveals the debate transcript one turn at a time, pacing each turn by
//! its reading time.

use crate::ports::session_observer::SessionObserver;
use council_domain::{Generation, RevealTiming, SessionState};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Lock the shared session, recovering the state if a holder panicked.
pub(crate) fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Drives the reveal cursor of one transcript.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackScheduler {
    timing: RevealTiming,
}

impl PlaybackScheduler {
    pub fn new(timing: RevealTiming) -> Self {
        Self { timing }
    }

    pub fn timing(&self) -> &RevealTiming {
        &self.timing
    }

    /// Start revealing the transcript of `generation`.
    ///
    /// The first message is revealed immediately; each following one after
    /// the reading time of its predecessor. The task stops when the
    /// transcript is fully revealed, when `cancel` fires, or as soon as the
    /// session has moved past `generation`.
    pub fn spawn(
        &self,
        state: Arc<Mutex<SessionState>>,
        generation: Generation,
        cancel: CancellationToken,
        observer: Arc<dyn SessionObserver>,
    ) -> JoinHandle<()> {
        let timing = self.timing;
        tokio::spawn(async move {
            Self::run(timing, state, generation, cancel, observer).await;
        })
    }

    async fn run(
        timing: RevealTiming,
        state: Arc<Mutex<SessionState>>,
        generation: Generation,
        cancel: CancellationToken,
        observer: Arc<dyn SessionObserver>,
    ) {
        loop {
            if cancel.is_cancelled() {
                debug!(generation = %generation, "Playback cancelled");
                return;
            }

            let step = {
                let mut state = lock(&state);
                match state.advance_reveal(generation) {
                    Ok(Some(index)) => Some((
                        index,
                        state.messages()[index].clone(),
                        state.is_reveal_complete(),
                    )),
                    Ok(None) => None,
                    Err(e) => {
                        debug!(generation = %generation, "Playback stopped: {}", e);
                        return;
                    }
                }
            };

            let Some((index, message, complete)) = step else {
                observer.on_reveal_complete(generation);
                return;
            };

            observer.on_reveal(index, &message);
            if complete {
                observer.on_reveal_complete(generation);
                return;
            }

            let delay = timing.delay_after(&message);
            debug!(index, delay_ms = delay.as_millis() as u64, "Next reveal scheduled");

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(generation = %generation, "Playback cancelled");
                    return;
                }
                _ = sleep(delay) => {}
            }
        }
    }
}
