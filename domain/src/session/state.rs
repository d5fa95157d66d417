//! Session state machine
//!
//! ```text
//! confessional ──submit──▶ confessional(loading) ──success──▶ debate
//!      ▲                        │                              │ reveal complete
//!      │                        └──failure──▶ confessional     ▼ + advance
//!      │                                                   verdict(index)
//!      │                                                    │ select ▲ back
//!      └──────────────── submit follow-up ─────────────── verdict(detail)
//!
//! A failed follow-up parks its prior verdict outside the transcript, so the
//! same follow-up can be retried from the confessional.
//!
//! any ──reset──▶ confessional (empty)
//! ```
//!
//! Every mutating method either applies a legal transition completely or
//! returns a [`SessionError`] and leaves the state untouched.

use super::error::{SessionError, SessionFault};
use super::stage::{Generation, Stage};
use crate::core::language::Language;
use crate::core::tier::UserTier;
use crate::deliberation::{CouncilResult, DebateMessage, PathId, StrategicPath, Verdict};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Everything the orchestration layer needs to run one request.
///
/// Issued by [`SessionState::begin_submit`]; its generation must be handed
/// back with the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub generation: Generation,
    pub query: String,
    pub context: String,
    pub dark_mode: bool,
    pub language: Language,
    pub prior_verdict: Option<Verdict>,
}

impl SubmitTicket {
    pub fn is_follow_up(&self) -> bool {
        self.prior_verdict.is_some()
    }
}

/// State of one council session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    stage: Stage,
    loading: bool,
    dilemma: String,
    context: String,
    language: Language,
    dark_mode: bool,
    messages: Vec<DebateMessage>,
    verdict: Option<Verdict>,
    /// Prior verdict of an in-flight or failed follow-up
    pending_verdict: Option<Verdict>,
    /// Index of the last revealed message; `None` means not started
    cursor: Option<usize>,
    follow_up: String,
    selected_path: Option<PathId>,
    completed_steps: BTreeSet<usize>,
    tier: UserTier,
    generation: Generation,
    error: Option<SessionFault>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Language::default(), false, UserTier::default())
    }
}

impl SessionState {
    pub fn new(language: Language, dark_mode: bool, tier: UserTier) -> Self {
        Self {
            stage: Stage::Confessional,
            loading: false,
            dilemma: String::new(),
            context: String::new(),
            language,
            dark_mode,
            messages: Vec::new(),
            verdict: None,
            pending_verdict: None,
            cursor: None,
            follow_up: String::new(),
            selected_path: None,
            completed_steps: BTreeSet::new(),
            tier,
            generation: Generation::default(),
            error: None,
        }
    }

    // ==================== Accessors ====================

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dilemma(&self) -> &str {
        &self.dilemma
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn messages(&self) -> &[DebateMessage] {
        &self.messages
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn follow_up(&self) -> &str {
        &self.follow_up
    }

    /// Whether a failed follow-up can be resubmitted from the confessional
    pub fn can_retry_follow_up(&self) -> bool {
        self.stage == Stage::Confessional && !self.loading && self.pending_verdict.is_some()
    }

    pub fn selected_path_id(&self) -> Option<PathId> {
        self.selected_path
    }

    pub fn selected_path(&self) -> Option<&StrategicPath> {
        let id = self.selected_path?;
        self.verdict.as_ref()?.path(id)
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed_steps
    }

    pub fn tier(&self) -> UserTier {
        self.tier
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn error(&self) -> Option<&SessionFault> {
        self.error.as_ref()
    }

    /// Reveal cursor, `-1` meaning nothing revealed yet
    pub fn reveal_cursor(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    /// Messages disclosed so far
    pub fn revealed_messages(&self) -> &[DebateMessage] {
        match self.cursor {
            Some(i) => &self.messages[..=i],
            None => &[],
        }
    }

    /// Whether the whole transcript has been disclosed
    pub fn is_reveal_complete(&self) -> bool {
        self.stage >= Stage::Debate
            && self.reveal_cursor() == self.messages.len() as isize - 1
    }

    // ==================== Input ====================

    pub fn set_dilemma(&mut self, dilemma: impl Into<String>) {
        self.dilemma = dilemma.into();
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    pub fn set_follow_up(&mut self, question: impl Into<String>) {
        self.follow_up = question.into();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Flip the dark-mode request flag.
    ///
    /// Gated by the tier, which the session reads but never changes.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, SessionError> {
        if !self.tier.can_toggle_dark_mode() {
            return Err(SessionError::TierLocked("Shadow mode"));
        }
        self.dark_mode = !self.dark_mode;
        Ok(self.dark_mode)
    }

    // ==================== Orchestration ====================

    /// Start a council request.
    ///
    /// A blank `query` falls back to the stored dilemma (or follow-up buffer).
    /// A follow-up moves the current verdict into the ticket and returns the
    /// session to the confessional stage, so no transcript survives there.
    /// After a failed follow-up the parked verdict is reused instead.
    pub fn begin_submit(
        &mut self,
        query: &str,
        is_follow_up: bool,
    ) -> Result<SubmitTicket, SessionError> {
        if self.loading {
            return Err(SessionError::Busy);
        }

        let stored = if is_follow_up { &self.follow_up } else { &self.dilemma };
        let query = if query.trim().is_empty() {
            stored.clone()
        } else {
            query.to_string()
        };
        if query.trim().is_empty() {
            return Err(SessionError::EmptyQuery);
        }

        let prior_verdict = if is_follow_up {
            let verdict = match (self.stage, &self.pending_verdict) {
                (Stage::Verdict, _) => {
                    let verdict = self.verdict.take().ok_or(SessionError::NoVerdict)?;
                    self.clear_transcript();
                    verdict
                }
                (Stage::Confessional, Some(parked)) => parked.clone(),
                (actual, _) => {
                    return Err(SessionError::WrongStage {
                        expected: Stage::Verdict,
                        actual,
                    });
                }
            };
            self.follow_up = query.clone();
            self.pending_verdict = Some(verdict.clone());
            Some(verdict)
        } else {
            if self.stage != Stage::Confessional {
                return Err(SessionError::WrongStage {
                    expected: Stage::Confessional,
                    actual: self.stage,
                });
            }
            self.dilemma = query.clone();
            self.pending_verdict = None;
            None
        };

        self.stage = Stage::Confessional;
        self.loading = true;
        self.error = None;
        self.generation = self.generation.next();

        debug!(
            generation = %self.generation,
            follow_up = is_follow_up,
            "Session: submit -> confessional(loading)"
        );

        Ok(SubmitTicket {
            generation: self.generation,
            query,
            context: self.context.clone(),
            dark_mode: self.dark_mode,
            language: self.language,
            prior_verdict,
        })
    }

    /// Apply a successful orchestration result
    pub fn complete(
        &mut self,
        generation: Generation,
        result: CouncilResult,
    ) -> Result<(), SessionError> {
        self.ensure_current(generation)?;
        self.ensure_loading()?;

        self.messages = result.debate;
        self.verdict = Some(result.verdict);
        self.pending_verdict = None;
        self.cursor = None;
        self.follow_up.clear();
        self.selected_path = None;
        self.completed_steps.clear();
        self.loading = false;
        self.stage = Stage::Debate;

        debug!(
            generation = %generation,
            messages = self.messages.len(),
            "Session: confessional(loading) -> debate"
        );
        Ok(())
    }

    /// Apply a terminal orchestration failure
    pub fn fail(&mut self, generation: Generation, fault: SessionFault) -> Result<(), SessionError> {
        self.ensure_current(generation)?;
        self.ensure_loading()?;

        debug!(
            generation = %generation,
            kind = %fault.kind,
            "Session: confessional(loading) -> confessional (failed)"
        );

        self.loading = false;
        self.stage = Stage::Confessional;
        self.error = Some(fault);
        Ok(())
    }

    /// Clear the surfaced error without touching transcript or verdict
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ==================== Playback ====================

    /// Reveal the next message of the current transcript.
    ///
    /// Returns the newly revealed index, or `None` when everything is
    /// already revealed.
    pub fn advance_reveal(&mut self, generation: Generation) -> Result<Option<usize>, SessionError> {
        self.ensure_current(generation)?;
        self.ensure_stage(Stage::Debate)?;

        if self.is_reveal_complete() {
            return Ok(None);
        }

        let next = self.cursor.map_or(0, |i| i + 1);
        self.cursor = Some(next);
        Ok(Some(next))
    }

    /// Reveal everything at once
    pub fn skip_reveal(&mut self) -> Result<(), SessionError> {
        self.ensure_stage(Stage::Debate)?;
        self.cursor = self.messages.len().checked_sub(1);
        Ok(())
    }

    /// Leave the debate for the verdict (path index view)
    pub fn advance_to_verdict(&mut self) -> Result<(), SessionError> {
        self.ensure_stage(Stage::Debate)?;
        if !self.is_reveal_complete() {
            return Err(SessionError::RevealIncomplete);
        }
        self.stage = Stage::Verdict;
        self.selected_path = None;
        debug!(generation = %self.generation, "Session: debate -> verdict");
        Ok(())
    }

    // ==================== Verdict views ====================

    pub fn select_path(&mut self, id: PathId) -> Result<(), SessionError> {
        self.ensure_stage(Stage::Verdict)?;
        let has_path = self.verdict.as_ref().is_some_and(|v| v.has_path(id));
        if !has_path {
            return Err(SessionError::UnknownPath(id));
        }
        self.selected_path = Some(id);
        self.completed_steps.clear();
        debug!(path = %id, "Session: verdict(index) -> verdict(detail)");
        Ok(())
    }

    pub fn back(&mut self) -> Result<(), SessionError> {
        self.ensure_stage(Stage::Verdict)?;
        if self.selected_path.take().is_none() {
            return Err(SessionError::NoPathSelected);
        }
        self.completed_steps.clear();
        debug!("Session: verdict(detail) -> verdict(index)");
        Ok(())
    }

    /// Toggle completion of an action step of the selected path.
    ///
    /// Returns whether the step is now marked complete.
    pub fn toggle_step(&mut self, index: usize) -> Result<bool, SessionError> {
        let len = self
            .selected_path()
            .map(|p| p.steps.len())
            .ok_or(SessionError::NoPathSelected)?;
        if index >= len {
            return Err(SessionError::StepOutOfRange { index, len });
        }
        if self.completed_steps.remove(&index) {
            Ok(false)
        } else {
            self.completed_steps.insert(index);
            Ok(true)
        }
    }

    // ==================== Reset ====================

    /// Return to an empty confessional.
    ///
    /// Bumps the generation so any in-flight request or pending reveal
    /// belonging to the old session is discarded on arrival. Language,
    /// context, dark mode and tier are kept.
    pub fn reset(&mut self) -> Generation {
        self.clear_transcript();
        self.stage = Stage::Confessional;
        self.loading = false;
        self.dilemma.clear();
        self.follow_up.clear();
        self.pending_verdict = None;
        self.error = None;
        self.generation = self.generation.next();
        debug!(generation = %self.generation, "Session: reset -> confessional");
        self.generation
    }

    // ==================== Invariants ====================

    /// Verify every structural invariant of the session
    pub fn check_invariants(&self) -> Result<(), SessionError> {
        let violated = |msg: String| Err(SessionError::InvariantViolated(msg));

        if let Some(i) = self.cursor {
            if i >= self.messages.len() {
                return violated(format!(
                    "cursor {} outside transcript of {}",
                    i,
                    self.messages.len()
                ));
            }
        }

        match self.stage {
            Stage::Confessional => {
                if !self.messages.is_empty() {
                    return violated("transcript present in confessional".into());
                }
                if self.verdict.is_some() {
                    return violated("verdict present in confessional".into());
                }
                if self.cursor.is_some() {
                    return violated("cursor advanced in confessional".into());
                }
            }
            Stage::Debate | Stage::Verdict => {
                if self.verdict.is_none() {
                    return violated(format!("no verdict in {}", self.stage));
                }
                if self.loading {
                    return violated(format!("loading in {}", self.stage));
                }
            }
        }

        if self.pending_verdict.is_some() && self.stage != Stage::Confessional {
            return violated(format!("parked follow-up verdict in {}", self.stage));
        }

        if let Some(id) = self.selected_path {
            if self.stage != Stage::Verdict {
                return violated(format!("path selected in {}", self.stage));
            }
            if !self.verdict.as_ref().is_some_and(|v| v.has_path(id)) {
                return violated(format!("selected path '{}' not in verdict", id));
            }
        } else if !self.completed_steps.is_empty() {
            return violated("completed steps without a selected path".into());
        }

        Ok(())
    }

    // ==================== Helpers ====================

    fn clear_transcript(&mut self) {
        self.messages.clear();
        self.verdict = None;
        self.cursor = None;
        self.selected_path = None;
        self.completed_steps.clear();
    }

    fn ensure_current(&self, generation: Generation) -> Result<(), SessionError> {
        if generation != self.generation {
            return Err(SessionError::Stale {
                got: generation,
                current: self.generation,
            });
        }
        Ok(())
    }

    fn ensure_loading(&self) -> Result<(), SessionError> {
        if !self.loading {
            return Err(SessionError::WrongStage {
                expected: Stage::Confessional,
                actual: self.stage,
            });
        }
        Ok(())
    }

    fn ensure_stage(&self, expected: Stage) -> Result<(), SessionError> {
        if self.stage != expected {
            return Err(SessionError::WrongStage {
                expected,
                actual: self.stage,
            });
        }
        Ok(())
    }
}
