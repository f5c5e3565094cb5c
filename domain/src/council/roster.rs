//! Role rosters for a council run
//!
//! Rosters are explicit configuration passed into the orchestration use
//! case, not module-level constants, so tests can substitute smaller or
//! stubbed rosters.

use serde::{Deserialize, Serialize};

/// An agent role: a persona that produces a candidate answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRole {
    /// Role identifier (e.g., "agent_analytical")
    pub id: String,
    /// System instruction defining the role's perspective
    pub instruction: String,
}

impl AgentRole {
    pub fn new(id: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instruction: instruction.into(),
        }
    }
}

/// A judge role: a persona that evaluates candidate answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeRole {
    /// Role identifier (e.g., "judge_primary")
    pub id: String,
    /// System instruction defining the judge's evaluation focus
    pub instruction: String,
}

impl JudgeRole {
    pub fn new(id: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instruction: instruction.into(),
        }
    }
}

/// The full roster for a council run
///
/// # Example
///
/// ```
/// use council_domain::council::roster::CouncilRoster;
///
/// let roster = CouncilRoster::standard();
/// assert_eq!(roster.agents.len(), 3);
/// assert_eq!(roster.judges.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouncilRoster {
    /// Agent roles, in panel execution order
    pub agents: Vec<AgentRole>,
    /// Judge roles, in panel execution order
    pub judges: Vec<JudgeRole>,
}

impl CouncilRoster {
    pub fn new(agents: Vec<AgentRole>, judges: Vec<JudgeRole>) -> Self {
        Self { agents, judges }
    }

    /// The standard roster: three agent perspectives, two judges.
    pub fn standard() -> Self {
        Self {
            agents: vec![
                AgentRole::new(
                    "agent_analytical",
                    "You are an analytical agent focused on logical reasoning and factual \
                     accuracy. Provide detailed, evidence-based responses.",
                ),
                AgentRole::new(
                    "agent_creative",
                    "You are a creative agent focused on innovative solutions and alternative \
                     perspectives. Think outside the box.",
                ),
                AgentRole::new(
                    "agent_practical",
                    "You are a practical agent focused on real-world applicability and \
                     actionable advice. Be concise and solution-oriented.",
                ),
            ],
            judges: vec![
                JudgeRole::new(
                    "judge_primary",
                    "You are a primary judge focused on overall quality and safety.",
                ),
                JudgeRole::new(
                    "judge_secondary",
                    "You are a secondary judge focused on identifying risks and edge cases.",
                ),
            ],
        }
    }

    /// First agent role id in roster order, used as the fallback winner
    /// when a judge's evaluation cannot be parsed.
    pub fn first_agent_id(&self) -> Option<&str> {
        self.agents.first().map(|a| a.id.as_str())
    }
}

impl Default for CouncilRoster {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_roster_sizes() {
        let roster = CouncilRoster::standard();
        assert_eq!(roster.agents.len(), 3);
        assert_eq!(roster.judges.len(), 2);
    }

    #[test]
    fn test_standard_roster_order() {
        let roster = CouncilRoster::standard();
        let agent_ids: Vec<&str> = roster.agents.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            agent_ids,
            vec!["agent_analytical", "agent_creative", "agent_practical"]
        );
        let judge_ids: Vec<&str> = roster.judges.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(judge_ids, vec!["judge_primary", "judge_secondary"]);
    }

    #[test]
    fn test_first_agent_id() {
        let roster = CouncilRoster::standard();
        assert_eq!(roster.first_agent_id(), Some("agent_analytical"));

        let empty = CouncilRoster::new(vec![], vec![]);
        assert_eq!(empty.first_agent_id(), None);
    }

    #[test]
    fn test_custom_roster() {
        let roster = CouncilRoster::new(
            vec![AgentRole::new("agent_stub", "You are a stub.")],
            vec![JudgeRole::new("judge_stub", "You judge stubs.")],
        );
        assert_eq!(roster.agents.len(), 1);
        assert_eq!(roster.first_agent_id(), Some("agent_stub"));
    }
}
