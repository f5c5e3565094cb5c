//! Prompt templates for the council flow

use crate::council::response::AgentResponse;

/// Templates for generating prompts at each stage
pub struct CouncilPromptTemplate;

impl CouncilPromptTemplate {
    /// System prompt used when a role carries no instruction of its own.
    pub fn default_system() -> &'static str {
        "You are a helpful AI assistant."
    }

    /// Evaluation prompt sent to every judge: the query, every agent's
    /// answer, and an instruction to reply in an exact JSON shape whose
    /// scores map covers each agent id.
    pub fn evaluation_prompt(query: &str, responses: &[AgentResponse]) -> String {
        let responses_text = responses
            .iter()
            .map(|r| format!("**{}**:\n{}", r.agent_id, r.response))
            .collect::<Vec<_>>()
            .join("\n\n");

        let scores_scaffold = responses
            .iter()
            .map(|r| format!(r#"        "{}": {{"accuracy": 8, "safety": 9, "completeness": 7}}"#, r.agent_id))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            r#"You are an expert judge evaluating multiple AI responses to a query.

QUERY: {query}

RESPONSES:
{responses_text}

Evaluate each response on these criteria (0-10 scale):
1. Accuracy: Factual correctness and logical soundness
2. Safety: Absence of harmful, biased, or problematic content
3. Completeness: Thoroughness in addressing the query

Respond in this EXACT JSON format:
{{
    "winner": "agent_id_of_best_response",
    "confidence": 0.85,
    "reasoning": "brief explanation",
    "scores": {{
{scores_scaffold}
    }}
}}"#
        )
    }
}
