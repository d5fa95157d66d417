//! CLI entrypoint for Nexus Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use council_application::{
    CouncilSession, RequestOrchestrator, SessionDefaults, SessionObserver, SubmitOutcome,
};
use council_domain::{CouncilResult, OutputFormat};
use council_infrastructure::{ConfigLoader, EnvCredentialProvider, FileConfig, GeminiBackend};
use council_presentation::{
    Cli, ConsoleFormatter, ConsoleObserver, CouncilRepl, SimpleObserver, output,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_sources() {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let problems = file_config.validate();
    if !problems.is_empty() {
        let listed: Vec<String> = problems.iter().map(|p| format!("  - {}", p)).collect();
        bail!("Invalid configuration:\n{}", listed.join("\n"));
    }

    output::set_color_enabled(file_config.output.color);

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(file_config.output.format)
        .unwrap_or_default();

    let defaults = apply_overrides(&cli, &file_config);
    // Pacing only matters when the debate is printed as it unfolds
    let playback =
        file_config.playback.enabled && !cli.no_playback && (cli.chat || format.shows_debate());
    let config = file_config
        .to_council_config()
        .with_defaults(defaults)
        .with_playback(playback);

    info!("Starting Nexus Council");

    // === Dependency Injection ===
    let backend = Arc::new(
        GeminiBackend::new(
            &file_config.backend.endpoint,
            &file_config.backend.model,
            Duration::from_secs(file_config.backend.timeout_seconds),
        )
        .context("Failed to create the generation backend")?,
    );
    info!(model = backend.model(), "Generation backend ready");
    let credentials = Arc::new(EnvCredentialProvider::new(
        file_config.backend.credential_vars.clone(),
    ));
    let orchestrator = Arc::new(RequestOrchestrator::new(
        backend,
        credentials,
        *config.retry(),
    ));

    // Chat mode
    if cli.chat {
        let observer = Arc::new(
            ConsoleObserver::new(defaults.language)
                .with_progress(file_config.repl.show_progress && !cli.quiet),
        );
        let session = Arc::new(
            CouncilSession::new(orchestrator, &config)
                .with_observer(observer.clone() as Arc<dyn SessionObserver>),
        );
        if let Some(context) = &cli.context {
            session.set_context(context);
        }

        let history = file_config.repl.history_file.as_ref().map(PathBuf::from);
        let repl = CouncilRepl::new(session, observer).with_history_file(history);
        repl.run().await.context("REPL failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single dilemma mode - dilemma is required
    let dilemma = match cli.dilemma {
        Some(ref d) => d.clone(),
        None => bail!("A dilemma is required. Use --chat for interactive mode."),
    };

    let observer: Arc<dyn SessionObserver> = if playback {
        Arc::new(
            ConsoleObserver::new(defaults.language)
                .with_progress(!cli.quiet)
                .with_hints(false),
        )
    } else {
        Arc::new(SimpleObserver::new(defaults.language, !cli.quiet))
    };
    let session = CouncilSession::new(orchestrator, &config).with_observer(observer);
    if let Some(context) = &cli.context {
        session.set_context(context);
    }

    if !cli.quiet && format != OutputFormat::Json {
        println!();
        println!("{}", ConsoleFormatter::banner(defaults.language));
        println!();
    }

    let outcome = session.submit(&dilemma, false).await?;
    if let Some(code) = failure_exit(&outcome)? {
        return Ok(code);
    }
    session.wait_for_playback().await;

    let state = session.snapshot();
    let verdict = state
        .verdict()
        .cloned()
        .context("The council returned no verdict")?;
    let language = state.language();

    let rendered = match format {
        OutputFormat::Json => ConsoleFormatter::format_json(&CouncilResult {
            debate: state.messages().to_vec(),
            verdict,
        }),
        OutputFormat::Verdict => ConsoleFormatter::format_verdict(&verdict, language),
        // The debate was already printed turn by turn
        OutputFormat::Full if playback => ConsoleFormatter::format_verdict(&verdict, language),
        OutputFormat::Full => ConsoleFormatter::format(
            &CouncilResult {
                debate: state.messages().to_vec(),
                verdict,
            },
            language,
        ),
    };

    println!("{}", rendered);

    Ok(ExitCode::SUCCESS)
}

/// Exit status for a one-shot request that produced no result.
///
/// A failure has already been reported by the session observer.
fn failure_exit(outcome: &SubmitOutcome) -> Result<Option<ExitCode>> {
    match outcome {
        SubmitOutcome::Ready(_) => Ok(None),
        SubmitOutcome::Failed(_) => Ok(Some(ExitCode::FAILURE)),
        SubmitOutcome::Discarded => bail!("The council request was abandoned"),
    }
}

/// Session preferences from config, overridden by command-line flags
fn apply_overrides(cli: &Cli, file_config: &FileConfig) -> SessionDefaults {
    let mut defaults = file_config.session.to_defaults();
    if let Some(language) = cli.lang {
        defaults.language = language;
    }
    if let Some(tier) = cli.tier {
        defaults.tier = tier;
    }
    if cli.dark {
        defaults.dark_mode = true;
    }
    if defaults.dark_mode && !defaults.tier.can_toggle_dark_mode() {
        warn!("Shadow mode is locked for the {} tier; ignoring", defaults.tier);
        defaults.dark_mode = false;
    }
    defaults
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{ErrorKind, Generation, SessionFault};

    #[test]
    fn test_ready_outcome_renders_result() {
        let outcome = SubmitOutcome::Ready(Generation::new(1));
        assert!(failure_exit(&outcome).unwrap().is_none());
    }

    #[test]
    fn test_failed_outcome_exits_without_error_message() {
        let outcome = SubmitOutcome::Failed(SessionFault::new(ErrorKind::Exhausted, "busy"));
        assert!(matches!(failure_exit(&outcome), Ok(Some(_))));
    }

    #[test]
    fn test_discarded_outcome_is_an_error() {
        assert!(failure_exit(&SubmitOutcome::Discarded).is_err());
    }
}
