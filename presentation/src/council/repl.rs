//! REPL (Read-Eval-Print Loop) for an interactive council session

use crate::output::console::ConsoleFormatter;
use crate::output::labels::Labels;
use crate::progress::reporter::ConsoleObserver;
use colored::Colorize;
use council_application::{CouncilSession, SubmitOutcome};
use council_domain::{PathId, SessionError, Stage, catalog};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive council REPL
pub struct CouncilRepl {
    session: Arc<CouncilSession>,
    observer: Arc<ConsoleObserver>,
    history_file: Option<PathBuf>,
}

impl CouncilRepl {
    pub fn new(session: Arc<CouncilSession>, observer: Arc<ConsoleObserver>) -> Self {
        Self {
            session,
            observer,
            history_file: dirs::data_dir().map(|p| p.join("nexus-council").join("history.txt")),
        }
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(&self.prompt());

            match readline {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    let flow = if line.starts_with('/') {
                        self.handle_command(&mut rl, line).await
                    } else {
                        self.submit(line, false).await;
                        Flow::Continue
                    };
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt(&self) -> String {
        let state = self.session.snapshot();
        let stage = match (state.stage(), state.selected_path_id()) {
            (Stage::Verdict, Some(id)) => format!("verdict:{}", id),
            (stage, _) => stage.to_string(),
        };
        let shadow = if state.dark_mode() { "†" } else { "" };
        format!("[{}{}] >>> ", stage, shadow)
    }

    fn print_welcome(&self) {
        let state = self.session.snapshot();
        println!();
        println!("{}", ConsoleFormatter::banner(state.language()));
        println!();
        println!(
            "Language: {}   Tier: {}   Shadow mode: {}",
            state.language(),
            state.tier(),
            if state.dark_mode() { "on" } else { "off" }
        );
        println!();
        println!("Describe your dilemma, or type /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  <text>              - Put a dilemma before the council");
        println!("  /context <text>     - Set background for the next dilemma");
        println!("  /categories         - List preset categories and life stages");
        println!("  /category <n>       - Submit preset category n as the dilemma");
        println!("  /skip               - Reveal the rest of the debate at once");
        println!("  /verdict            - Open the verdict once the debate is revealed");
        println!("  /paths              - Show the three strategic paths");
        println!("  /path <id|n>        - Open a path (aggressive, conservative, lateral or 1-3)");
        println!("  /step <n>           - Toggle completion of step n of the open path");
        println!("  /back               - Return to the path index");
        println!("  /followup [text]    - Ask a follow-up (no text retries a failed one)");
        println!("  /dark               - Toggle shadow mode");
        println!("  /lang               - Switch between zh-TW and en");
        println!("  /agents             - Show the council roster");
        println!("  /dismiss            - Clear the last error");
        println!("  /reset              - Start a new chapter");
        println!("  /help, /h, /?       - Show this help");
        println!("  /quit, /exit, /q    - Exit");
        println!();
    }

    /// Handle slash commands
    async fn handle_command(&self, rl: &mut DefaultEditor, line: &str) -> Flow {
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return Flow::Quit;
            }
            "/help" | "/h" | "/?" => Self::print_help(),
            "/context" => {
                self.session.set_context(arg);
                println!("Context set.");
            }
            "/categories" => {
                println!("{}", ConsoleFormatter::format_catalog(self.session.snapshot().language()));
            }
            "/category" => {
                let language = self.session.snapshot().language();
                match arg.parse::<usize>().ok().and_then(|n| catalog::category(language, n)) {
                    Some(category) => self.submit(category, false).await,
                    None => println!("Usage: /category <1-{}>", catalog::categories(language).len()),
                }
            }
            "/skip" => {
                self.report(self.session.skip_reveal());
            }
            "/verdict" => {
                if self.report(self.session.advance_to_verdict()) {
                    self.show_verdict();
                }
            }
            "/paths" => self.show_verdict(),
            "/path" => match arg.parse::<PathId>() {
                Ok(id) => {
                    if self.report(self.session.select_path(id)) {
                        self.show_path();
                    }
                }
                Err(_) => println!("Usage: /path <aggressive|conservative|lateral|1-3>"),
            },
            "/step" => match arg.parse::<usize>() {
                Ok(n) if n > 0 => {
                    if self.report(self.session.toggle_step(n - 1)) {
                        self.show_path();
                    }
                }
                _ => println!("Usage: /step <n>"),
            },
            "/back" => {
                if self.report(self.session.back()) {
                    self.show_verdict();
                }
            }
            "/followup" => self.submit(arg, true).await,
            "/dark" => {
                if let Ok(on) = self.session.toggle_dark_mode().map_err(Self::print_session_error) {
                    println!("Shadow mode {}.", if on { "on" } else { "off" });
                }
            }
            "/lang" => {
                let language = self.session.snapshot().language().toggled();
                self.session.set_language(language);
                self.observer.set_language(language);
                println!("Language: {}", language);
            }
            "/agents" => {
                let state = self.session.snapshot();
                println!("{}", ConsoleFormatter::format_agents(state.language(), state.tier()));
            }
            "/dismiss" => self.session.dismiss_error(),
            "/reset" => {
                if self.confirm_reset(rl) {
                    self.session.reset();
                    println!("A new chapter begins.");
                }
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        Flow::Continue
    }

    async fn submit(&self, query: &str, is_follow_up: bool) {
        println!();
        match self.session.submit(query, is_follow_up).await {
            Ok(SubmitOutcome::Ready(_)) => self.session.wait_for_playback().await,
            Ok(SubmitOutcome::Failed(_)) => {
                if self.session.snapshot().can_retry_follow_up() {
                    println!("{}", "Type /followup to ask again.".dimmed());
                }
                println!("{}", "Type /dismiss to clear the error.".dimmed());
            }
            Ok(SubmitOutcome::Discarded) => {}
            Err(e) => Self::print_session_error(e),
        }
        println!();
    }

    /// Ask before discarding anything the session holds
    fn confirm_reset(&self, rl: &mut DefaultEditor) -> bool {
        let state = self.session.snapshot();
        let pristine = state.stage() == Stage::Confessional
            && !state.is_loading()
            && state.dilemma().is_empty()
            && !state.can_retry_follow_up();
        if pristine {
            return true;
        }
        let question = Labels::for_language(state.language()).reset_confirm;
        match rl.readline(&format!("{} [y/N] ", question)) {
            Ok(answer) => is_affirmative(&answer),
            Err(_) => false,
        }
    }

    fn show_verdict(&self) {
        let state = self.session.snapshot();
        match (state.stage(), state.verdict()) {
            (Stage::Verdict, Some(verdict)) => {
                println!("{}", ConsoleFormatter::format_verdict(verdict, state.language()));
            }
            _ => println!("No verdict yet."),
        }
    }

    fn show_path(&self) {
        let state = self.session.snapshot();
        if let Some(path) = state.selected_path() {
            println!(
                "{}",
                ConsoleFormatter::format_path_detail(
                    path,
                    state.language(),
                    state.tier(),
                    state.completed_steps()
                )
            );
        }
    }

    /// Print a rejected transition; returns whether the call succeeded
    fn report<T>(&self, result: Result<T, SessionError>) -> bool {
        match result {
            Ok(_) => true,
            Err(e) => {
                Self::print_session_error(e);
                false
            }
        }
    }

    fn print_session_error(e: SessionError) {
        println!("{} {}", "!".yellow().bold(), e);
        match e {
            SessionError::WrongStage { .. } | SessionError::NoVerdict => {
                println!("{}", "Type /reset to start over.".dimmed());
            }
            SessionError::RevealIncomplete => {
                println!("{}", "Type /skip to reveal the rest.".dimmed());
            }
            _ => {}
        }
    }
}

/// Whether a confirmation answer means yes
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "是")
}
