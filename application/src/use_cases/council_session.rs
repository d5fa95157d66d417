//! Council session use case
//!
//! Owns the session state machine and wires it to the orchestrator and the
//! playback scheduler. This is the only place an orchestration outcome is
//! turned into session state.

use super::orchestrate::{OrchestrationError, RequestOrchestrator};
use super::playback::{PlaybackScheduler, lock};
use crate::config::CouncilConfig;
use crate::ports::session_observer::{NoObserver, SessionObserver};
use council_domain::{
    CouncilResult, Generation, Language, PathId, PromptComposer, SessionError, SessionFault,
    SessionState, Stage,
};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// How a submit settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The transcript is in; the debate stage has begun
    Ready(Generation),
    /// The request failed; the fault is stored in the session
    Failed(SessionFault),
    /// The session moved on (reset) before the request settled
    Discarded,
}

/// A live council session
pub struct CouncilSession {
    state: Arc<Mutex<SessionState>>,
    orchestrator: Arc<RequestOrchestrator>,
    scheduler: PlaybackScheduler,
    observer: Arc<dyn SessionObserver>,
    playback_enabled: bool,
    request_cancel: Mutex<CancellationToken>,
    reveal_cancel: Mutex<CancellationToken>,
    playback: Mutex<Option<JoinHandle<()>>>,
}

impl CouncilSession {
    pub fn new(orchestrator: Arc<RequestOrchestrator>, config: &CouncilConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(config.initial_state())),
            orchestrator,
            scheduler: PlaybackScheduler::new(*config.timing()),
            observer: Arc::new(NoObserver),
            playback_enabled: config.playback(),
            request_cancel: Mutex::new(CancellationToken::new()),
            reveal_cancel: Mutex::new(CancellationToken::new()),
            playback: Mutex::new(None),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// A copy of the current session state
    pub fn snapshot(&self) -> SessionState {
        lock(&self.state).clone()
    }

    // ==================== Orchestration ====================

    /// Put a dilemma (or a follow-up question) before the council.
    ///
    /// Waits for the request to settle. On success the debate stage begins
    /// and the transcript is revealed in the background (or all at once when
    /// playback is disabled).
    pub async fn submit(
        &self,
        query: &str,
        is_follow_up: bool,
    ) -> Result<SubmitOutcome, SessionError> {
        let ticket = lock(&self.state).begin_submit(query, is_follow_up)?;
        let generation = ticket.generation;

        self.stop_playback();
        let cancel = Self::renew(&self.request_cancel);

        info!(generation = %generation, follow_up = ticket.is_follow_up(), "Council summoned");
        self.observer.on_loading(true);

        let prompt = PromptComposer::compose(
            &ticket.query,
            &ticket.context,
            ticket.dark_mode,
            ticket.language,
            ticket.prior_verdict.as_ref(),
        );
        let outcome = self.orchestrator.execute(&prompt, &cancel).await;

        match outcome {
            Ok(result) => self.settle_success(generation, result),
            Err(err) => self.settle_failure(generation, err),
        }
    }

    fn settle_success(
        &self,
        generation: Generation,
        result: CouncilResult,
    ) -> Result<SubmitOutcome, SessionError> {
        let messages = result.debate.len();
        let applied = lock(&self.state).complete(generation, result);
        if let Err(e) = applied {
            return Self::discard(e);
        }

        self.observer.on_loading(false);
        self.observer.on_transcript_ready(generation, messages);
        self.observer.on_stage_change(Stage::Debate);

        if self.playback_enabled {
            let cancel = Self::renew(&self.reveal_cancel);
            let handle = self.scheduler.spawn(
                self.state.clone(),
                generation,
                cancel,
                self.observer.clone(),
            );
            *self.playback.lock().unwrap_or_else(|p| p.into_inner()) = Some(handle);
        } else {
            self.reveal_all()?;
        }

        Ok(SubmitOutcome::Ready(generation))
    }

    fn settle_failure(
        &self,
        generation: Generation,
        err: OrchestrationError,
    ) -> Result<SubmitOutcome, SessionError> {
        let fault = SessionFault::new(err.kind(), err.to_string());
        let applied = lock(&self.state).fail(generation, fault.clone());
        if let Err(e) = applied {
            return Self::discard(e);
        }

        error!(generation = %generation, kind = %fault.kind, "Council request failed: {}", err);
        self.observer.on_loading(false);
        self.observer.on_error(fault.kind, &fault.message);
        Ok(SubmitOutcome::Failed(fault))
    }

    fn discard(e: SessionError) -> Result<SubmitOutcome, SessionError> {
        if e.is_stale() {
            debug!("Discarding council outcome: {}", e);
            Ok(SubmitOutcome::Discarded)
        } else {
            Err(e)
        }
    }

    /// Wait until the running playback (if any) has finished
    pub async fn wait_for_playback(&self) {
        let handle = self.playback.lock().unwrap_or_else(|p| p.into_inner()).take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                error!("Playback task failed: {}", e);
            }
        }
    }

    /// Clear the surfaced error
    pub fn dismiss_error(&self) {
        lock(&self.state).dismiss_error();
    }

    /// Back to an empty confessional, abandoning any request or reveal.
    pub fn reset(&self) -> Generation {
        let generation = lock(&self.state).reset();
        self.request_cancel_token().cancel();
        self.stop_playback();
        self.observer.on_loading(false);
        self.observer.on_stage_change(Stage::Confessional);
        generation
    }

    // ==================== Playback ====================

    /// Reveal the remaining transcript at once
    pub fn skip_reveal(&self) -> Result<(), SessionError> {
        self.stop_playback();
        self.reveal_all()
    }

    fn reveal_all(&self) -> Result<(), SessionError> {
        let (generation, revealed) = {
            let mut state = lock(&self.state);
            let before = state.reveal_cursor();
            state.skip_reveal()?;
            let first = usize::try_from(before + 1).unwrap_or(0);
            let revealed: Vec<_> = state
                .messages()
                .iter()
                .enumerate()
                .skip(first)
                .map(|(i, m)| (i, m.clone()))
                .collect();
            (state.generation(), revealed)
        };

        for (index, message) in &revealed {
            self.observer.on_reveal(*index, message);
        }
        self.observer.on_reveal_complete(generation);
        Ok(())
    }

    fn stop_playback(&self) {
        self.reveal_cancel
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .cancel();
        self.playback.lock().unwrap_or_else(|p| p.into_inner()).take();
    }

    fn request_cancel_token(&self) -> CancellationToken {
        self.request_cancel
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    /// Replace the token in `slot` with a fresh one and return it
    fn renew(slot: &Mutex<CancellationToken>) -> CancellationToken {
        let token = CancellationToken::new();
        *slot.lock().unwrap_or_else(|p| p.into_inner()) = token.clone();
        token
    }

    // ==================== Verdict ====================

    pub fn advance_to_verdict(&self) -> Result<(), SessionError> {
        lock(&self.state).advance_to_verdict()?;
        self.observer.on_stage_change(Stage::Verdict);
        Ok(())
    }

    pub fn select_path(&self, id: PathId) -> Result<(), SessionError> {
        lock(&self.state).select_path(id)
    }

    pub fn back(&self) -> Result<(), SessionError> {
        lock(&self.state).back()
    }

    pub fn toggle_step(&self, index: usize) -> Result<bool, SessionError> {
        lock(&self.state).toggle_step(index)
    }

    // ==================== Input ====================

    pub fn set_dilemma(&self, dilemma: &str) {
        lock(&self.state).set_dilemma(dilemma);
    }

    pub fn set_context(&self, context: &str) {
        lock(&self.state).set_context(context);
    }

    pub fn set_follow_up(&self, question: &str) {
        lock(&self.state).set_follow_up(question);
    }

    pub fn set_language(&self, language: Language) {
        lock(&self.state).set_language(language);
    }

    pub fn toggle_dark_mode(&self) -> Result<bool, SessionError> {
        lock(&self.state).toggle_dark_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use crate::ports::credentials::StaticCredential;
    use crate::ports::generation_backend::BackendError;
    use crate::use_cases::testing::{Event, RecordingObserver, ScriptedBackend, payload_with, valid_payload};
    use council_domain::ErrorKind;
    use std::time::Duration;

    fn session_with(
        backend: ScriptedBackend,
        playback: bool,
    ) -> (CouncilSession, Arc<ScriptedBackend>, Arc<RecordingObserver>) {
        let backend = Arc::new(backend);
        let orchestrator = Arc::new(RequestOrchestrator::new(
            backend.clone(),
            Arc::new(StaticCredential::new("key")),
            RetryPolicy::default(),
        ));
        let config = CouncilConfig::default().with_playback(playback);
        let observer = Arc::new(RecordingObserver::default());
        let session = CouncilSession::new(orchestrator, &config).with_observer(observer.clone());
        (session, backend, observer)
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_reveal_and_verdict() {
        let (session, _, observer) =
            session_with(ScriptedBackend::new(vec![Ok(valid_payload())]), true);

        let outcome = session.submit("Should I quit?", false).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Ready(_)));
        assert_eq!(session.snapshot().stage(), Stage::Debate);
        assert_eq!(session.advance_to_verdict(), Err(SessionError::RevealIncomplete));

        session.wait_for_playback().await;
        assert!(session.snapshot().is_reveal_complete());
        assert_eq!(observer.reveals(), vec![0, 1]);

        session.advance_to_verdict().unwrap();
        session.select_path(PathId::Conservative).unwrap();
        assert_eq!(session.toggle_step(1), Ok(true));
        assert_eq!(
            session.snapshot().selected_path().unwrap().lead_agent_id,
            "buffett"
        );
        assert!(observer.events().contains(&Event::Stage(Stage::Verdict)));
    }

    #[tokio::test]
    async fn test_submit_without_playback_reveals_everything() {
        let (session, _, observer) = session_with(
            ScriptedBackend::new(vec![Ok(payload_with(&["a", "b", "c"]))]),
            false,
        );

        session.submit("Should I quit?", false).await.unwrap();
        let state = session.snapshot();
        assert!(state.is_reveal_complete());
        assert_eq!(state.reveal_cursor(), 2);
        assert_eq!(observer.reveals(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_failure_is_stored_and_dismissable() {
        let (session, backend, observer) = session_with(
            ScriptedBackend::new(vec![Err(BackendError::other("403 forbidden"))]),
            false,
        );

        let outcome = session.submit("Should I quit?", false).await.unwrap();
        let SubmitOutcome::Failed(fault) = outcome else {
            panic!("expected failure, got {:?}", outcome);
        };
        assert_eq!(fault.kind, ErrorKind::Unretryable);
        assert_eq!(backend.call_count(), 1);

        let state = session.snapshot();
        assert_eq!(state.stage(), Stage::Confessional);
        assert!(!state.is_loading());
        assert_eq!(state.error().unwrap().kind, ErrorKind::Unretryable);
        assert!(observer.events().contains(&Event::Error(ErrorKind::Unretryable)));

        session.dismiss_error();
        assert!(session.snapshot().error().is_none());
    }

    #[tokio::test]
    async fn test_follow_up_round_trip() {
        let (session, backend, _) = session_with(
            ScriptedBackend::new(vec![Ok(valid_payload()), Ok(payload_with(&["refined"]))]),
            false,
        );

        session.submit("Should I quit?", false).await.unwrap();
        session.advance_to_verdict().unwrap();
        session.submit("How do I fund it?", true).await.unwrap();

        let request = backend.last_request().unwrap();
        assert!(request.user_prompt.contains("How do I fund it?"));
        assert!(request.system_instruction.contains("EXECUTION_FOLLOWUP"));

        let state = session.snapshot();
        assert_eq!(state.stage(), Stage::Debate);
        assert_eq!(state.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_follow_up_is_retried_with_prior_verdict() {
        let (session, backend, _) = session_with(
            ScriptedBackend::new(vec![
                Ok(valid_payload()),
                Err(BackendError::other("400 bad request")),
                Ok(payload_with(&["refined"])),
            ]),
            false,
        );

        session.submit("Should I quit?", false).await.unwrap();
        session.advance_to_verdict().unwrap();
        let outcome = session.submit("How do I fund it?", true).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(session.snapshot().can_retry_follow_up());

        let outcome = session.submit("", true).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Ready(_)));
        assert_eq!(backend.call_count(), 3);

        let request = backend.last_request().unwrap();
        assert!(request.user_prompt.contains("How do I fund it?"));
        assert!(request.system_instruction.contains("EXECUTION_FOLLOWUP"));
        assert_eq!(session.snapshot().stage(), Stage::Debate);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_while_request_in_flight_discards_result() {
        let backend =
            ScriptedBackend::new(vec![Ok(valid_payload())]).with_latency(Duration::from_secs(5));
        let (session, _, _) = session_with(backend, false);
        let session = Arc::new(session);

        let submitter = {
            let session = session.clone();
            tokio::spawn(async move { session.submit("Should I quit?", false).await })
        };

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(session.snapshot().is_loading());
        session.reset();

        let outcome = submitter.await.unwrap().unwrap();
        assert_eq!(outcome, SubmitOutcome::Discarded);
        let state = session.snapshot();
        assert_eq!(state.stage(), Stage::Confessional);
        assert!(state.messages().is_empty());
        assert!(state.error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_during_playback_stops_reveals() {
        let (session, _, observer) = session_with(
            ScriptedBackend::new(vec![Ok(payload_with(&["first", "second", "third"]))]),
            true,
        );

        session.submit("Should I quit?", false).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        session.reset();
        tokio::time::sleep(Duration::from_secs(10)).await;

        let state = session.snapshot();
        assert_eq!(state.reveal_cursor(), -1);
        assert!(state.messages().is_empty());
        assert_eq!(observer.reveals(), vec![0]);
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_busy() {
        let (session, _, _) = session_with(ScriptedBackend::new(vec![]), false);
        lock(&session.state).begin_submit("first", false).unwrap();
        assert_eq!(
            session.submit("second", false).await,
            Err(SessionError::Busy)
        );
    }
}
