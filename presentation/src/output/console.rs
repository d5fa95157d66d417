//! Console output formatter for council sessions

use super::labels::Labels;
use colored::Colorize;
use council_domain::{
    AgentProfile, AgentRegistry, CouncilResult, DebateMessage, ErrorKind, Language, PathId,
    RiskLevel, StrategicPath, UserTier, Verdict, catalog,
};
use std::collections::BTreeSet;

/// Width of the metric bars
const BAR_WIDTH: usize = 20;

/// Formats council output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title banner
    pub fn banner(language: Language) -> String {
        let labels = Labels::for_language(language);
        format!(
            "{}\n{}",
            Self::header(labels.title),
            format!("{:^60}", labels.subtitle).dimmed()
        )
    }

    // ==================== Debate ====================

    /// One debate turn, headed by the speaker's name and title
    pub fn format_message(index: usize, message: &DebateMessage, language: Language) -> String {
        let speaker = match AgentRegistry::get(&message.agent_id) {
            Some(agent) => format!(
                "{} · {}",
                agent.display_name(language),
                agent.display_title(language)
            ),
            None => message.agent_id.clone(),
        };
        format!(
            "\n{} {}\n{}\n",
            format!("[{:02}]", index + 1).dimmed(),
            format!("── {} ──", speaker).yellow().bold(),
            Self::indent(&message.content, "  ")
        )
    }

    /// The whole transcript at once
    pub fn format_debate(messages: &[DebateMessage], language: Language) -> String {
        let labels = Labels::for_language(language);
        let mut output = Self::section_header(labels.debate_title);
        for (index, message) in messages.iter().enumerate() {
            output.push_str(&Self::format_message(index, message, language));
        }
        output
    }

    // ==================== Verdict ====================

    /// Diagnosis, conflict resolution and the path index
    pub fn format_verdict(verdict: &Verdict, language: Language) -> String {
        let labels = Labels::for_language(language);
        let mut output = Self::header(labels.verdict_title);
        output.push('\n');

        if verdict.is_dark_verdict {
            output.push_str(&format!("{}\n", labels.shadow_alert.red().bold()));
        }

        output.push_str(&format!(
            "\n{}\n{}\n",
            labels.diagnosis.cyan().bold(),
            Self::indent(&verdict.diagnosis, "  ")
        ));
        output.push_str(&format!(
            "\n{}\n{}\n",
            labels.conflict_resolution.cyan().bold(),
            Self::indent(&verdict.conflict_resolution, "  ")
        ));

        output.push_str(&Self::format_matrix(verdict));
        output.push_str(&Self::format_path_index(verdict, language));
        output
    }

    /// Conflict matrix: one block per dimension, one line per path stance
    pub fn format_matrix(verdict: &Verdict) -> String {
        let mut output = String::new();
        for row in &verdict.matrix {
            output.push_str(&format!("\n{}\n", row.dimension.bold()));
            for id in PathId::ALL {
                output.push_str(&format!(
                    "  {:<14} {}\n",
                    Self::path_tag(id),
                    row.stance(id)
                ));
            }
        }
        output
    }

    /// Numbered list of the three strategic paths
    pub fn format_path_index(verdict: &Verdict, language: Language) -> String {
        let labels = Labels::for_language(language);
        let mut output = Self::section_header(labels.select_path);
        for (n, path) in verdict.paths.iter().enumerate() {
            let lead = Self::agent_name(&path.lead_agent_id, language);
            output.push_str(&format!(
                "\n  {} {} {}\n     {} {} · {} {}\n",
                format!("{}.", n + 1).bold(),
                Self::path_tag(path.id),
                path.title.bold(),
                labels.lead_agent.dimmed(),
                lead,
                labels.risk_level.dimmed(),
                Self::risk_tag(path.risk_level)
            ));
        }
        output
    }

    /// Full detail of one path: steps, metrics (tier-gated) and core model
    pub fn format_path_detail(
        path: &StrategicPath,
        language: Language,
        tier: UserTier,
        completed: &BTreeSet<usize>,
    ) -> String {
        let labels = Labels::for_language(language);
        let mut output = Self::header(&format!("{} {}", path.id.pill(), path.title));
        output.push('\n');

        output.push_str(&format!(
            "{} {}   {} {}\n",
            labels.lead_agent.dimmed(),
            Self::agent_name(&path.lead_agent_id, language),
            labels.risk_level.dimmed(),
            Self::risk_tag(path.risk_level)
        ));
        output.push_str(&format!("\n{}\n", Self::indent(&path.description, "  ")));
        output.push_str(&format!(
            "\n{} {}\n",
            labels.upside.green().bold(),
            path.upside
        ));

        output.push_str(&Self::section_header(labels.strategy));
        for (i, step) in path.steps.iter().enumerate() {
            let mark = if completed.contains(&i) {
                "[x]".green()
            } else {
                "[ ]".normal()
            };
            output.push_str(&format!("  {} {}. {}\n", mark, i + 1, step));
        }

        output.push_str(&Self::section_header(labels.metrics));
        if tier.can_view_metrics() {
            for (name, value) in path.metrics.entries() {
                output.push_str(&format!("  {:<11} {} {:>5.1}\n", name, Self::bar(value), value));
            }
        } else {
            output.push_str(&format!("  {} LOCKED · {}\n", "#".dimmed(), labels.locked));
        }

        output.push_str(&Self::section_header(labels.code));
        output.push_str(&format!(
            "  \"{}\"\n  - {}\n",
            path.code.text.italic(),
            path.code.author
        ));
        output.push_str(&format!("\n{}\n", format!("/back: {}", labels.back_to_index).dimmed()));
        output
    }

    /// Complete result (debate and verdict)
    pub fn format(result: &CouncilResult, language: Language) -> String {
        let mut output = Self::format_debate(&result.debate, language);
        output.push('\n');
        output.push_str(&Self::format_verdict(&result.verdict, language));
        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &CouncilResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    // ==================== Roster & catalog ====================

    /// The agent roster; premium personas are masked for observers
    pub fn format_agents(language: Language, tier: UserTier) -> String {
        let mut output = Self::section_header("Council");
        for agent in AgentRegistry::all() {
            output.push_str(&Self::format_agent(agent, language, tier));
        }
        output
    }

    fn format_agent(agent: &AgentProfile, language: Language, tier: UserTier) -> String {
        if agent.is_locked_for(tier) {
            return format!(
                "  {:<12} {} {}\n",
                agent.id.dimmed(),
                agent.display_name(language).dimmed(),
                "(LOCKED)".dimmed()
            );
        }
        format!(
            "  {:<12} {} · {}\n               {} {}\n",
            agent.id.cyan(),
            agent.display_name(language).bold(),
            agent.display_title(language),
            agent.reasoning_style().as_str().dimmed(),
            format!("\"{}\"", agent.motto).italic()
        )
    }

    /// Preset categories and life stages
    pub fn format_catalog(language: Language) -> String {
        let labels = Labels::for_language(language);
        let mut output = Self::section_header(labels.category);
        for (n, name) in catalog::categories(language).iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", n + 1, name));
        }
        output.push_str(&Self::section_header(labels.life_stage));
        output.push_str(&format!("  {}\n", catalog::life_stages(language).join(" · ")));
        output
    }

    // ==================== Errors ====================

    pub fn format_error(kind: ErrorKind, message: &str) -> String {
        format!("{} [{}] {}", "Error:".red().bold(), kind.as_str(), message)
    }

    // ==================== Helpers ====================

    fn agent_name(id: &str, language: Language) -> String {
        AgentRegistry::get(id)
            .map(|a| a.display_name(language).to_string())
            .unwrap_or_else(|| id.to_string())
    }

    fn path_tag(id: PathId) -> String {
        let tag = format!("[{}]", id.pill());
        match id {
            PathId::Aggressive => tag.red().to_string(),
            PathId::Conservative => tag.blue().to_string(),
            PathId::Lateral => tag.yellow().to_string(),
        }
    }

    fn risk_tag(risk: RiskLevel) -> String {
        match risk {
            RiskLevel::Extreme => risk.as_str().red().bold().to_string(),
            RiskLevel::Moderate => risk.as_str().yellow().to_string(),
            RiskLevel::Low => risk.as_str().green().to_string(),
        }
    }

    /// Horizontal bar for a 0-100 score
    pub fn bar(value: f64) -> String {
        let filled = ((value.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
        format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{ConflictDimension, CoreModel, StrategicMetrics};

    fn sample_path() -> StrategicPath {
        StrategicPath {
            id: PathId::Lateral,
            title: "Sidestep".to_string(),
            lead_agent_id: "naval".to_string(),
            description: "Build leverage.".to_string(),
            risk_level: RiskLevel::Moderate,
            upside: "Freedom".to_string(),
            metrics: StrategicMetrics {
                innovation: 90.0,
                risk: 40.0,
                speed: 50.0,
                capital: 20.0,
                resilience: 70.0,
            },
            steps: vec!["Write".to_string(), "Code".to_string()],
            code: CoreModel {
                author: "Naval".to_string(),
                text: "Play long-term games.".to_string(),
            },
        }
    }

    fn sample_verdict() -> Verdict {
        Verdict {
            diagnosis: "You are stuck.".to_string(),
            conflict_resolution: "Balance.".to_string(),
            is_dark_verdict: false,
            matrix: vec![ConflictDimension {
                dimension: "Focus".to_string(),
                aggressive: "all in".to_string(),
                conservative: "hedge".to_string(),
                lateral: "reframe".to_string(),
            }],
            paths: vec![sample_path()],
        }
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }

    #[test]
    fn test_bar_bounds() {
        colored::control::set_override(false);
        assert_eq!(ConsoleFormatter::bar(0.0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(ConsoleFormatter::bar(100.0).chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert_eq!(ConsoleFormatter::bar(50.0).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(ConsoleFormatter::bar(150.0).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_message_uses_localized_name() {
        colored::control::set_override(false);
        let message = DebateMessage::new("munger", "Invert.");
        let en = ConsoleFormatter::format_message(0, &message, Language::En);
        assert!(en.contains("Charlie Munger"));
        assert!(en.contains("[01]"));
        assert!(en.contains("  Invert."));
    }

    #[test]
    fn test_unknown_speaker_falls_back_to_id() {
        colored::control::set_override(false);
        let message = DebateMessage::new("ghost", "Boo.");
        assert!(ConsoleFormatter::format_message(2, &message, Language::En).contains("ghost"));
    }

    #[test]
    fn test_metrics_locked_for_observer() {
        colored::control::set_override(false);
        let path = sample_path();
        let none = BTreeSet::new();
        let observer = ConsoleFormatter::format_path_detail(&path, Language::En, UserTier::Observer, &none);
        assert!(observer.contains("LOCKED"));
        assert!(!observer.contains("innovation"));

        let commander =
            ConsoleFormatter::format_path_detail(&path, Language::En, UserTier::Commander, &none);
        assert!(commander.contains("innovation"));
        assert!(!commander.contains("LOCKED"));
    }

    #[test]
    fn test_path_detail_headings_are_localized() {
        colored::control::set_override(false);
        let none = BTreeSet::new();
        let zh = ConsoleFormatter::format_path_detail(&sample_path(), Language::ZhTw, UserTier::Commander, &none);
        assert!(zh.contains("戰略指標"));
        assert!(!zh.contains("Metrics"));

        let en = ConsoleFormatter::format_path_detail(&sample_path(), Language::En, UserTier::Commander, &none);
        assert!(en.contains("Strategic Metrics"));
    }

    #[test]
    fn test_error_line_carries_kind_tag() {
        colored::control::set_override(false);
        let line = ConsoleFormatter::format_error(ErrorKind::MissingCredential, "No API key");
        assert_eq!(line, "Error: [missing_credential] No API key");
    }

    #[test]
    fn test_completed_steps_are_marked() {
        colored::control::set_override(false);
        let completed = BTreeSet::from([1]);
        let output = ConsoleFormatter::format_path_detail(
            &sample_path(),
            Language::En,
            UserTier::Commander,
            &completed,
        );
        assert!(output.contains("[ ] 1. Write"));
        assert!(output.contains("[x] 2. Code"));
    }

    #[test]
    fn test_verdict_lists_paths_and_matrix() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_verdict(&sample_verdict(), Language::En);
        assert!(output.contains("Diagnosis"));
        assert!(output.contains("Focus"));
        assert!(output.contains("reframe"));
        assert!(output.contains("1. "));
        assert!(output.contains("Sidestep"));
        assert!(!output.contains("Machiavellian"));
    }

    #[test]
    fn test_agents_masked_for_observer() {
        colored::control::set_override(false);
        let observer = ConsoleFormatter::format_agents(Language::En, UserTier::Observer);
        let commander = ConsoleFormatter::format_agents(Language::En, UserTier::Commander);
        assert!(observer.contains("(LOCKED)"));
        assert!(!commander.contains("(LOCKED)"));
    }

    #[test]
    fn test_catalog_lists_categories() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_catalog(Language::En);
        assert!(output.contains("1. Career Pivot"));
        assert!(output.contains("Freelancer"));
    }
}
