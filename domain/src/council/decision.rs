//! Final decision aggregate

use crate::council::gate::SafetyGateStatus;
use crate::council::response::AgentResponse;
use crate::council::score::JudgeScore;
use crate::council::tally::AggregatedVerdict;
use crate::util::now_rfc3339;
use serde::{Deserialize, Serialize};

/// Complete, auditable output of one council run
///
/// Created once at the end of a run and never mutated. References exactly
/// the agent responses and judge scores produced in the same run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Agent role id with the most judge votes
    pub winner: String,
    /// Mean of judge confidences, unclamped
    pub confidence: f64,
    /// Risk strings derived during aggregation, judge order
    pub risks: Vec<String>,
    /// Citation findings, agent roster order (or the sentinel entry)
    pub citations: Vec<String>,
    /// Every agent response from this run, roster order
    pub agent_responses: Vec<AgentResponse>,
    /// Every judge score from this run, roster order
    pub judge_scores: Vec<JudgeScore>,
    /// Safety gate classification
    pub safety_gate_status: SafetyGateStatus,
    /// Creation time, RFC 3339
    pub timestamp: String,
}

impl Decision {
    /// Assemble the decision from the run's artifacts, stamped with the
    /// current time.
    pub fn new(
        verdict: AggregatedVerdict,
        citations: Vec<String>,
        agent_responses: Vec<AgentResponse>,
        judge_scores: Vec<JudgeScore>,
        safety_gate_status: SafetyGateStatus,
    ) -> Self {
        Self {
            winner: verdict.winner,
            confidence: verdict.confidence,
            risks: verdict.risks,
            citations,
            agent_responses,
            judge_scores,
            safety_gate_status,
            timestamp: now_rfc3339(),
        }
    }
}
