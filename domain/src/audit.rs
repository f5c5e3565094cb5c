//! Append-only audit log
//!
//! Records every intermediate and final artifact of a council run in
//! creation order. Entries are never removed or reordered; the log lives
//! as long as its owning orchestrator and simply accumulates if that
//! orchestrator is reused across runs.

use crate::council::decision::Decision;
use crate::council::response::AgentResponse;
use crate::council::score::JudgeScore;
use serde::{Deserialize, Serialize};

/// One tagged audit record
///
/// Serializes as `{"type": "<kind>", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum AuditEntry {
    AgentResponse(AgentResponse),
    JudgeScore(JudgeScore),
    FinalDecision(Decision),
}

impl AuditEntry {
    /// The entry's kind tag, as serialized.
    pub fn kind(&self) -> &'static str {
        match self {
            AuditEntry::AgentResponse(_) => "agent_response",
            AuditEntry::JudgeScore(_) => "judge_score",
            AuditEntry::FinalDecision(_) => "final_decision",
        }
    }
}

/// Append-only ordered sequence of audit entries
///
/// Serializes transparently as a JSON array, suitable for writing as a
/// complete snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Entries are never removed or reordered.
    pub fn push(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    /// All entries, in append order.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Explicit reset for callers that reuse one orchestrator across many
    /// runs and do not want unbounded growth.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_append_order() {
        let mut log = AuditLog::new();
        log.push(AuditEntry::AgentResponse(AgentResponse::new("agent_a", "x")));
        log.push(AuditEntry::JudgeScore(JudgeScore::fallback(
            "judge_1", "agent_a", "test",
        )));

        let kinds: Vec<&str> = log.entries().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec!["agent_response", "judge_score"]);
    }

    #[test]
    fn test_clear_resets_log() {
        let mut log = AuditLog::new();
        log.push(AuditEntry::AgentResponse(AgentResponse::new("agent_a", "x")));
        assert_eq!(log.len(), 1);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_wire_format() {
        let mut log = AuditLog::new();
        log.push(AuditEntry::AgentResponse(AgentResponse::new(
            "agent_analytical",
            "The answer.",
        )));

        let json = serde_json::to_value(&log).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["type"], "agent_response");
        assert_eq!(json[0]["data"]["agent_id"], "agent_analytical");
        assert_eq!(json[0]["data"]["response"], "The answer.");
    }
}
