//! Progress reporting for council sessions

use crate::output::console::ConsoleFormatter;
use crate::output::labels::Labels;
use colored::Colorize;
use council_application::SessionObserver;
use council_domain::{DebateMessage, ErrorKind, Generation, Language, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Prints the debate as it is revealed, with a spinner while the council
/// deliberates.
pub struct ConsoleObserver {
    language: Mutex<Language>,
    show_progress: bool,
    show_hints: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleObserver {
    pub fn new(language: Language) -> Self {
        Self {
            language: Mutex::new(language),
            show_progress: true,
            show_hints: true,
            spinner: Mutex::new(None),
        }
    }

    /// Set whether to print REPL command hints
    pub fn with_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    /// Set whether to show the spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Language used for speaker names
    pub fn set_language(&self, language: Language) {
        *self.language.lock().unwrap_or_else(|p| p.into_inner()) = language;
    }

    fn language(&self) -> Language {
        *self.language.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self) {
        let labels = Labels::for_language(self.language());
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(labels.loading.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap_or_else(|p| p.into_inner()) = Some(pb);
    }

    fn stop_spinner(&self) {
        if let Some(pb) = self.spinner.lock().unwrap_or_else(|p| p.into_inner()).take() {
            pb.finish_and_clear();
        }
    }
}

impl SessionObserver for ConsoleObserver {
    fn on_loading(&self, loading: bool) {
        if !self.show_progress {
            return;
        }
        if loading {
            self.start_spinner();
        } else {
            self.stop_spinner();
        }
    }

    fn on_transcript_ready(&self, _generation: Generation, _messages: usize) {
        let labels = Labels::for_language(self.language());
        println!("\n{}", labels.debate_title.cyan().bold());
        println!("{}", "-".repeat(40));
    }

    fn on_reveal(&self, index: usize, message: &DebateMessage) {
        print!("{}", ConsoleFormatter::format_message(index, message, self.language()));
    }

    fn on_reveal_complete(&self, _generation: Generation) {
        if !self.show_hints {
            return;
        }
        let labels = Labels::for_language(self.language());
        println!("\n{}", format!("/verdict: {}", labels.proceed_verdict).dimmed());
    }

    fn on_stage_change(&self, stage: Stage) {
        if stage == Stage::Confessional {
            self.stop_spinner();
        }
    }

    fn on_error(&self, kind: ErrorKind, message: &str) {
        self.stop_spinner();
        eprintln!("{}", ConsoleFormatter::format_error(kind, message));
        if kind == ErrorKind::MissingCredential {
            eprintln!("{}", "Set an API key and try again.".yellow());
        }
    }
}

/// Quiet observer for one-shot runs that print the result themselves
pub struct SimpleObserver {
    language: Language,
    show_progress: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl SimpleObserver {
    pub fn new(language: Language, show_progress: bool) -> Self {
        Self {
            language,
            show_progress,
            spinner: Mutex::new(None),
        }
    }
}

impl SessionObserver for SimpleObserver {
    fn on_loading(&self, loading: bool) {
        if !self.show_progress {
            return;
        }
        let mut slot = self.spinner.lock().unwrap_or_else(|p| p.into_inner());
        if loading {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ConsoleObserver::spinner_style());
            pb.set_message(Labels::for_language(self.language).loading.to_string());
            pb.enable_steady_tick(Duration::from_millis(100));
            *slot = Some(pb);
        } else if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }
    }

    fn on_error(&self, kind: ErrorKind, message: &str) {
        if let Some(pb) = self.spinner.lock().unwrap_or_else(|p| p.into_inner()).take() {
            pb.finish_and_clear();
        }
        eprintln!("{}", ConsoleFormatter::format_error(kind, message));
    }
}
