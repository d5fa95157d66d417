//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::{Language, UserTier};
use std::path::PathBuf;

/// Output format for council results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Debate transcript followed by the verdict
    Full,
    /// Only the verdict
    Verdict,
    /// JSON output
    Json,
}

impl From<OutputFormat> for council_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Verdict => Self::Verdict,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for nexus-council
#[derive(Parser, Debug)]
#[command(name = "nexus-council")]
#[command(author, version, about = "The Council - Legendary minds debate your dilemma")]
#[command(long_about = r#"
Nexus Council puts your dilemma before a council of fourteen simulated
strategists. They debate it, then deliver a verdict with three strategic
paths: aggressive, conservative and lateral.

An API key is read from API_KEY, VITE_API_KEY or GEMINI_API_KEY.

Configuration files are loaded from (in priority order):
1. COUNCIL_* environment variables (e.g. COUNCIL_BACKEND__MODEL)
2. --config <path>     Explicit config file
3. ./council.toml      Project-level config
4. ~/.config/nexus-council/config.toml   Global config

Example:
  nexus-council "Should I leave my job to start a company?"
  nexus-council --lang en --context "Senior engineer, 34" "Quit or stay?"
  nexus-council --chat --dark
"#)]
pub struct Cli {
    /// The dilemma to put before the council (not required in chat mode)
    pub dilemma: Option<String>,

    /// Additional background for the dilemma
    #[arg(long, value_name = "TEXT")]
    pub context: Option<String>,

    /// Output language (zh-TW or en)
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<Language>,

    /// Request a shadow-mode (unfiltered) verdict
    #[arg(long)]
    pub dark: bool,

    /// Access tier (observer or commander)
    #[arg(long, value_name = "TIER")]
    pub tier: Option<UserTier>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the debate at once instead of revealing it turn by turn
    #[arg(long)]
    pub no_playback: bool,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::try_parse_from([
            "nexus-council",
            "--lang",
            "en",
            "--tier",
            "observer",
            "--dark",
            "-o",
            "verdict",
            "Quit?",
        ])
        .unwrap();
        assert_eq!(cli.dilemma.as_deref(), Some("Quit?"));
        assert_eq!(cli.lang, Some(Language::En));
        assert_eq!(cli.tier, Some(UserTier::Observer));
        assert!(cli.dark);
        assert_eq!(cli.output, Some(OutputFormat::Verdict));
    }

    #[test]
    fn test_parse_chat_with_verbosity() {
        let cli = Cli::try_parse_from(["nexus-council", "--chat", "-vv", "--no-playback"]).unwrap();
        assert!(cli.chat);
        assert!(cli.no_playback);
        assert_eq!(cli.verbose, 2);
        assert!(cli.dilemma.is_none());
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(Cli::try_parse_from(["nexus-council", "--lang", "fr", "Quit?"]).is_err());
    }
}
