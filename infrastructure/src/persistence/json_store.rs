//! JSON snapshot writer for decisions and audit logs.
//!
//! Each save is a complete pretty-printed snapshot, not an incremental
//! append: the decision document and the full ordered audit log are
//! written whole, overwriting any previous snapshot at the same path.

use council_application::ports::decision_store::{DecisionStore, PersistError};
use council_domain::{AuditLog, Decision};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Decision store that writes JSON snapshot files.
pub struct JsonSnapshotStore {
    decision_path: PathBuf,
    audit_path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store writing to the given paths.
    ///
    /// Parent directories are created on first write.
    pub fn new(decision_path: impl Into<PathBuf>, audit_path: impl Into<PathBuf>) -> Self {
        Self {
            decision_path: decision_path.into(),
            audit_path: audit_path.into(),
        }
    }

    pub fn decision_path(&self) -> &Path {
        &self.decision_path
    }

    pub fn audit_path(&self) -> &Path {
        &self.audit_path
    }

    fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl DecisionStore for JsonSnapshotStore {
    fn save_decision(&self, decision: &Decision) -> Result<(), PersistError> {
        Self::write_pretty(&self.decision_path, decision)?;
        info!("Decision saved to {}", self.decision_path.display());
        Ok(())
    }

    fn save_audit_log(&self, audit: &AuditLog) -> Result<(), PersistError> {
        Self::write_pretty(&self.audit_path, audit)?;
        info!("Audit log saved to {}", self.audit_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{
        AgentResponse, AggregatedVerdict, AuditEntry, JudgeScore, SafetyGateStatus,
    };

    fn sample_decision() -> Decision {
        Decision::new(
            AggregatedVerdict {
                winner: "agent_practical".to_string(),
                confidence: 0.85,
                risks: vec![],
            },
            vec!["No explicit citations found".to_string()],
            vec![AgentResponse::new("agent_practical", "Do X.")],
            vec![JudgeScore::fallback("judge_primary", "agent_practical", "test")],
            SafetyGateStatus::Approved,
        )
    }

    #[test]
    fn test_decision_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(
            dir.path().join("decision.json"),
            dir.path().join("audit_log.json"),
        );

        store.save_decision(&sample_decision()).unwrap();

        let content = fs::read_to_string(store.decision_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["winner"], "agent_practical");
        assert_eq!(value["safety_gate_status"], "APPROVED");
        assert_eq!(value["agent_responses"][0]["agent_id"], "agent_practical");
    }

    #[test]
    fn test_audit_snapshot_is_ordered_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(
            dir.path().join("decision.json"),
            dir.path().join("audit_log.json"),
        );

        let mut audit = AuditLog::new();
        audit.push(AuditEntry::AgentResponse(AgentResponse::new("agent_a", "x")));
        audit.push(AuditEntry::JudgeScore(JudgeScore::fallback(
            "judge_1", "agent_a", "test",
        )));
        store.save_audit_log(&audit).unwrap();

        let content = fs::read_to_string(store.audit_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value[0]["type"], "agent_response");
        assert_eq!(value[1]["type"], "judge_score");
        assert_eq!(value[1]["data"]["judge_id"], "judge_1");
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(
            dir.path().join("runs/latest/decision.json"),
            dir.path().join("runs/latest/audit_log.json"),
        );

        store.save_decision(&sample_decision()).unwrap();
        assert!(store.decision_path().exists());
    }

    #[test]
    fn test_snapshot_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(
            dir.path().join("decision.json"),
            dir.path().join("audit_log.json"),
        );

        store.save_decision(&sample_decision()).unwrap();
        let first = fs::read_to_string(store.decision_path()).unwrap();
        store.save_decision(&sample_decision()).unwrap();
        let second = fs::read_to_string(store.decision_path()).unwrap();

        // Same shape both times - a complete snapshot, not an append
        let a: serde_json::Value = serde_json::from_str(&first).unwrap();
        let b: serde_json::Value = serde_json::from_str(&second).unwrap();
        assert_eq!(a["winner"], b["winner"]);
    }
}
