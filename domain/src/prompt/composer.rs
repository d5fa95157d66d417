//! Prompt composer

use super::schema::output_schema;
use super::template::PromptTemplate;
use crate::agent::AgentRegistry;
use crate::core::language::Language;
use crate::deliberation::Verdict;
use serde::Serialize;
use serde_json::Value;

/// Which kind of sitting is being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliberationMode {
    /// Fresh dilemma, no prior verdict
    InitialStrategy,
    /// Follow-up question refining a prior verdict
    ExecutionFollowup,
}

impl DeliberationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliberationMode::InitialStrategy => "INITIAL_STRATEGY",
            DeliberationMode::ExecutionFollowup => "EXECUTION_FOLLOWUP",
        }
    }
}

impl std::fmt::Display for DeliberationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The full instruction payload for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPrompt {
    pub mode: DeliberationMode,
    pub system_instruction: String,
    pub user_prompt: String,
    pub output_schema: Value,
}

/// Builds [`ComposedPrompt`]s from a dilemma and the static agent roster.
///
/// Pure function of its inputs: every agent is always rendered, whatever the
/// access tier, and nothing is read from the environment.
pub struct PromptComposer;

impl PromptComposer {
    pub fn compose(
        dilemma: &str,
        context: &str,
        dark_mode: bool,
        language: Language,
        prior_verdict: Option<&Verdict>,
    ) -> ComposedPrompt {
        let mode = if prior_verdict.is_some() {
            DeliberationMode::ExecutionFollowup
        } else {
            DeliberationMode::InitialStrategy
        };

        let system_instruction = Self::system_instruction(mode, dark_mode, language, prior_verdict);
        let user_prompt = match mode {
            DeliberationMode::InitialStrategy => PromptTemplate::initial_query(dilemma, context),
            DeliberationMode::ExecutionFollowup => PromptTemplate::follow_up_query(dilemma),
        };

        ComposedPrompt {
            mode,
            system_instruction,
            user_prompt,
            output_schema: output_schema(),
        }
    }

    fn system_instruction(
        mode: DeliberationMode,
        dark_mode: bool,
        language: Language,
        prior_verdict: Option<&Verdict>,
    ) -> String {
        let agents = AgentRegistry::all();
        let mut instruction = PromptTemplate::preamble(agents.len());

        for agent in agents {
            instruction.push('\n');
            instruction.push_str(&PromptTemplate::agent_protocol(agent));
        }

        instruction.push('\n');
        instruction.push_str(PromptTemplate::simulation_guidelines());
        instruction.push_str(&format!("\n\n### MODE: {} ###\n", mode));

        if let Some(verdict) = prior_verdict {
            // Verdict is plain data; serialization cannot fail.
            let serialized = serde_json::to_string(verdict).unwrap_or_default();
            instruction.push_str(&format!("CURRENT STRATEGY: {}\n", serialized));
        }

        instruction.push_str(&format!(
            r#"
### THE RULES ###
1. DEBATE: Agents must talk TO each other, not just to the user. They should clash based on their conflicting profiles.
2. SHADOW_MODE: {}
3. LANGUAGE: {}

"#,
            PromptTemplate::shadow_mode_rule(dark_mode),
            PromptTemplate::language_rule(language),
        ));
        instruction.push_str(PromptTemplate::verdict_rules());

        instruction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deliberation::{ConflictDimension, CoreModel, PathId, RiskLevel, StrategicMetrics, StrategicPath};

    fn sample_verdict() -> Verdict {
        let path = |id: PathId, lead: &str| StrategicPath {
            id,
            title: format!("{} title", id),
            lead_agent_id: lead.to_string(),
            description: "desc".to_string(),
            risk_level: RiskLevel::Moderate,
            upside: "upside".to_string(),
            metrics: StrategicMetrics {
                innovation: 50.0,
                risk: 50.0,
                speed: 50.0,
                capital: 50.0,
                resilience: 50.0,
            },
            steps: vec!["step one".to_string()],
            code: CoreModel {
                author: "Munger".to_string(),
                text: "Invert, always invert.".to_string(),
            },
        };
        Verdict {
            diagnosis: "PRIOR-DIAGNOSIS-MARKER".to_string(),
            conflict_resolution: "resolution".to_string(),
            is_dark_verdict: false,
            matrix: vec![
                ConflictDimension {
                    dimension: "Focus".to_string(),
                    aggressive: "a".to_string(),
                    conservative: "c".to_string(),
                    lateral: "l".to_string(),
                };
                4
            ],
            paths: vec![
                path(PathId::Aggressive, "musk"),
                path(PathId::Conservative, "buffett"),
                path(PathId::Lateral, "naval"),
            ],
        }
    }

    #[test]
    fn test_initial_mode_without_prior_verdict() {
        let prompt = PromptComposer::compose("Quit?", "ctx", false, Language::En, None);
        assert_eq!(prompt.mode, DeliberationMode::InitialStrategy);
        assert!(prompt.system_instruction.contains("### MODE: INITIAL_STRATEGY ###"));
        assert!(!prompt.system_instruction.contains("CURRENT STRATEGY"));
        assert!(prompt.user_prompt.contains("DILEMMA: \"Quit?\""));
    }

    #[test]
    fn test_follow_up_embeds_prior_verdict() {
        let verdict = sample_verdict();
        let prompt = PromptComposer::compose("And funding?", "", false, Language::En, Some(&verdict));
        assert_eq!(prompt.mode, DeliberationMode::ExecutionFollowup);
        assert!(prompt.system_instruction.contains("### MODE: EXECUTION_FOLLOWUP ###"));
        assert!(prompt.system_instruction.contains("CURRENT STRATEGY: {"));
        assert!(prompt.system_instruction.contains("PRIOR-DIAGNOSIS-MARKER"));
        assert!(prompt.user_prompt.contains("FOLLOW-UP QUESTION: \"And funding?\""));
    }

    #[test]
    fn test_every_agent_is_rendered() {
        let prompt = PromptComposer::compose("Quit?", "", false, Language::ZhTw, None);
        for agent in AgentRegistry::all() {
            let header = format!("--- AGENT ID: {} ({}) ---", agent.id, agent.name);
            assert!(prompt.system_instruction.contains(&header), "missing {}", agent.id);
            assert!(prompt.system_instruction.contains(agent.character_prompt));
        }
        assert!(prompt.system_instruction.contains("GRAND ASSEMBLY\" of 14"));
    }

    #[test]
    fn test_dark_mode_changes_rule_not_schema() {
        let light = PromptComposer::compose("Quit?", "", false, Language::En, None);
        let dark = PromptComposer::compose("Quit?", "", true, Language::En, None);
        assert!(light.system_instruction.contains("SHADOW_MODE: INACTIVE"));
        assert!(dark.system_instruction.contains("SHADOW_MODE: ACTIVE"));
        assert_eq!(light.output_schema, dark.output_schema);
    }

    #[test]
    fn test_language_rule() {
        let zh = PromptComposer::compose("Quit?", "", false, Language::ZhTw, None);
        let en = PromptComposer::compose("Quit?", "", false, Language::En, None);
        assert!(zh.system_instruction.contains("LANGUAGE: Traditional Chinese"));
        assert!(en.system_instruction.contains("LANGUAGE: English"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = PromptComposer::compose("Quit?", "ctx", true, Language::En, None);
        let b = PromptComposer::compose("Quit?", "ctx", true, Language::En, None);
        assert_eq!(a, b);
    }
}
