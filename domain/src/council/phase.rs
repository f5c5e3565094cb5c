//! Council run phases

use serde::{Deserialize, Serialize};

/// Phases of a council run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Agent panel - every agent role answers the query
    Agents,
    /// Judge panel - every judge role scores the answers
    Judges,
    /// Aggregation, safety gate, and decision assembly
    Decision,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Agents => "agents",
            Phase::Judges => "judges",
            Phase::Decision => "decision",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Agents => "Agent Responses",
            Phase::Judges => "Judge Evaluation",
            Phase::Decision => "Decision",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
