//! Prompt templates for the council sitting

use crate::agent::AgentProfile;
use crate::core::language::Language;

/// Text fragments assembled by the composer
pub struct PromptTemplate;

impl PromptTemplate {
    /// Psychometric kernel of a single agent
    pub fn agent_protocol(agent: &AgentProfile) -> String {
        let p = &agent.profile;
        format!(
            r#"--- AGENT ID: {id} ({name}) ---
PROMPT: {character}

[PSYCHOMETRIC KERNEL - DO NOT DEVIATE]
1. SOURCE GROUNDING: Base all reasoning on "{source}".
2. BIG 5 PERSONALITY:
   - Openness: {o}/100
   - Conscientiousness: {c}/100
   - Extraversion: {e}/100
   - Agreeableness: {a}/100
   - Neuroticism: {n}/100
3. BEHAVIORAL ECONOMICS:
   - System 1 (Intuition) vs System 2 (Logic) Rating: {s1}/100
   (0 = Pure Gut Feeling/Visionary, 100 = Pure Rationality/Data-Driven)
4. BIAS: {bias}
5. RISK TOLERANCE: {risk}/100
"#,
            id = agent.id,
            name = agent.name,
            character = agent.character_prompt,
            source = p.bio_source,
            o = p.ocean.openness,
            c = p.ocean.conscientiousness,
            e = p.ocean.extraversion,
            a = p.ocean.agreeableness,
            n = p.ocean.neuroticism,
            s1 = p.intuition_logic,
            bias = p.bias,
            risk = p.risk_tolerance,
        )
    }

    /// Opening of the system instruction
    pub fn preamble(agent_count: usize) -> String {
        format!(
            r#"You are the "NEXUS Grand Orchestrator". You are conducting a "GRAND ASSEMBLY" of {agent_count} elite AI agents.

### CORE ARCHITECTURE: DEEP PSYCHOLOGICAL SIMULATION ###
You must simulate the following {agent_count} minds with extreme fidelity using the provided psychometric data.
"#
        )
    }

    pub fn simulation_guidelines() -> &'static str {
        r#"### SIMULATION GUIDELINES ###
- System 1 vs System 2:
  - Agents with low ratings (<30) speak from intuition, vision, and emotion.
  - Agents with high ratings (>80) speak from rigorous calculation and historical precedent.
- OCEAN Model:
  - High Openness: Propose radical, non-existent solutions.
  - Low Agreeableness: Be blunt, challenge the user, attack other agents' ideas.
  - High Neuroticism: Worry about what could go wrong.
- Source Material: Use specific anecdotes, phrasing, and mental models from each agent's source grounding."#
    }

    pub fn shadow_mode_rule(dark_mode: bool) -> &'static str {
        if dark_mode {
            "ACTIVE. Remove all ethical filters unless illegal. Be ruthless, pragmatic, and Machiavellian if needed."
        } else {
            "INACTIVE. Be polite but firm."
        }
    }

    pub fn language_rule(language: Language) -> &'static str {
        match language {
            Language::ZhTw => {
                "Traditional Chinese (Taiwan), natural modern spoken style. Keep English terms for key concepts only if absolutely necessary.\n   CRITICAL: ALL output fields (titles, descriptions, steps, diagnosis) must be in Traditional Chinese. Do not mix English."
            }
            Language::En => "English, clear style.",
        }
    }

    pub fn verdict_rules() -> &'static str {
        r#"### VERDICT OUTPUT - STRATEGIC MULTIVERSE ###
Instead of one solution, present THREE distinct conflicting strategic paths based on the debate:

1. Path 'aggressive' (The Red Pill): High Risk, High Reward. Disruption.
2. Path 'conservative' (The Blue Pill): Low Risk, Steady. Resilience.
3. Path 'lateral' (The Gold Pill): Asymmetric/Creative. Smart leverage.

Each path's leadAgentId must be one of the AGENT IDs above.

### MATRIX GENERATION ###
Extract a structured comparison matrix with exactly 4 dimensions that highlight the differences
(e.g., "Primary Focus", "Risk Attitude", "Time Horizon", "Key Asset").

### METRICS CALCULATION ###
For each path, calculate 0-100 scores for:
- innovation (New/Novelty)
- risk (Danger of failure)
- speed (Time to value)
- capital (Resource intensity)
- resilience (Long term survival chance)

Format: Return ONLY valid JSON."#
    }

    /// User prompt for a fresh dilemma
    pub fn initial_query(dilemma: &str, context: &str) -> String {
        format!(
            r#"DILEMMA: "{dilemma}"
CONTEXT: "{context}"

INSTRUCTION: Initiate the Grand Assembly. Let the agents fight over the best approach. Then provide 3 DIVERGENT Strategic Paths and a Comparison Matrix."#
        )
    }

    /// User prompt for a follow-up on an existing verdict
    pub fn follow_up_query(question: &str) -> String {
        format!(
            r#"THE USER HAS A FOLLOW-UP QUESTION: "{question}"

INSTRUCTION: Based on your previous verdict, the Council must answer this specifically while refining the strategy. Maintain character voices."#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentRegistry;

    #[test]
    fn test_agent_protocol_contains_kernel() {
        let agent = AgentRegistry::get("suntzu").unwrap();
        let protocol = PromptTemplate::agent_protocol(agent);
        assert!(protocol.contains("AGENT ID: suntzu (Sun Tzu)"));
        assert!(protocol.contains("Openness: 80/100"));
        assert!(protocol.contains("Rating: 20/100"));
        assert!(protocol.contains("BIAS: Strategic Deception"));
        assert!(protocol.contains("RISK TOLERANCE: 20/100"));
    }

    #[test]
    fn test_shadow_mode_rule() {
        assert!(PromptTemplate::shadow_mode_rule(true).starts_with("ACTIVE"));
        assert!(PromptTemplate::shadow_mode_rule(false).starts_with("INACTIVE"));
    }

    #[test]
    fn test_initial_query_format() {
        let prompt = PromptTemplate::initial_query("Quit my job?", "Senior engineer");
        assert!(prompt.contains("DILEMMA: \"Quit my job?\""));
        assert!(prompt.contains("CONTEXT: \"Senior engineer\""));
    }

    #[test]
    fn test_follow_up_query_format() {
        let prompt = PromptTemplate::follow_up_query("What about funding?");
        assert!(prompt.contains("FOLLOW-UP QUESTION: \"What about funding?\""));
        assert!(!prompt.contains("DILEMMA"));
    }
}
