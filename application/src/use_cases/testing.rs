//! Test doubles shared by the use case tests.

use crate::ports::credentials::Credential;
use crate::ports::generation_backend::{BackendError, GenerationBackend, GenerationRequest};
use crate::ports::session_observer::SessionObserver;
use async_trait::async_trait;
use council_domain::{DebateMessage, ErrorKind, Generation, Stage};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

// ==================== Payloads ====================

fn path(id: &str, lead: &str) -> Value {
    json!({
        "id": id,
        "title": format!("{id} title"),
        "leadAgentId": lead,
        "description": "desc",
        "riskLevel": "MODERATE",
        "upside": "upside",
        "metrics": { "innovation": 80, "risk": 40, "speed": 60, "capital": 30, "resilience": 70 },
        "steps": ["first", "second"],
        "code": { "author": "Sun Tzu", "text": "Know yourself." }
    })
}

fn row(name: &str) -> Value {
    json!({ "dimension": name, "aggressive": "a", "conservative": "c", "lateral": "l" })
}

/// A contract-conforming payload whose debate has the given contents
pub fn payload_with(contents: &[&str]) -> String {
    let debate: Vec<Value> = contents
        .iter()
        .map(|c| json!({ "agentId": "munger", "content": c }))
        .collect();
    json!({
        "debate": debate,
        "verdict": {
            "diagnosis": "diag",
            "conflictResolution": "res",
            "isDarkVerdict": false,
            "matrix": [row("Focus"), row("Risk"), row("Horizon"), row("Asset")],
            "paths": [path("aggressive", "musk"), path("conservative", "buffett"), path("lateral", "naval")]
        }
    })
    .to_string()
}

pub fn valid_payload() -> String {
    payload_with(&["Go to Mars.", "Invert, always invert."])
}

// ==================== Scripted backend ====================

/// Backend that replays a fixed script and records when it was called
pub struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, BackendError>>>,
    calls: Mutex<Vec<Instant>>,
    requests: Mutex<Vec<GenerationRequest>>,
    keys: Mutex<Vec<String>>,
    latency: Duration,
}

impl ScriptedBackend {
    pub fn new(script: Vec<Result<String, BackendError>>) -> Self {
        Self {
            script: Mutex::new(VecDeque::from(script)),
            calls: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            keys: Mutex::new(Vec::new()),
            latency: Duration::ZERO,
        }
    }

    /// Make every call take `latency` before answering
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Time between consecutive calls
    pub fn gaps(&self) -> Vec<Duration> {
        let calls = self.calls.lock().unwrap();
        calls.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn last_key(&self) -> Option<String> {
        self.keys.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate(
        &self,
        request: &GenerationRequest,
        credential: &Credential,
    ) -> Result<String, BackendError> {
        self.calls.lock().unwrap().push(Instant::now());
        self.requests.lock().unwrap().push(request.clone());
        self.keys.lock().unwrap().push(credential.expose().to_string());

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::other("script exhausted")))
    }
}

// ==================== Recording observer ====================

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Loading(bool),
    TranscriptReady(usize),
    Reveal(usize, Instant),
    RevealComplete(Generation),
    Stage(Stage),
    Error(ErrorKind),
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Indices revealed, in order
    pub fn reveals(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Reveal(i, _) => Some(i),
                _ => None,
            })
            .collect()
    }

    /// Time between consecutive reveals
    pub fn reveal_gaps(&self) -> Vec<Duration> {
        let times: Vec<Instant> = self
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Reveal(_, at) => Some(at),
                _ => None,
            })
            .collect();
        times.windows(2).map(|w| w[1] - w[0]).collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl SessionObserver for RecordingObserver {
    fn on_loading(&self, loading: bool) {
        self.push(Event::Loading(loading));
    }

    fn on_transcript_ready(&self, _generation: Generation, messages: usize) {
        self.push(Event::TranscriptReady(messages));
    }

    fn on_reveal(&self, index: usize, _message: &DebateMessage) {
        self.push(Event::Reveal(index, Instant::now()));
    }

    fn on_reveal_complete(&self, generation: Generation) {
        self.push(Event::RevealComplete(generation));
    }

    fn on_stage_change(&self, stage: Stage) {
        self.push(Event::Stage(stage));
    }

    fn on_error(&self, kind: ErrorKind, _message: &str) {
        self.push(Event::Error(kind));
    }
}
