//! Port for decision and audit persistence.
//!
//! Persistence is a complete-snapshot write performed after a run, not an
//! incremental stream: the caller hands over the finished [`Decision`] and
//! the full ordered [`AuditLog`].

use council_domain::{AuditLog, Decision};
use thiserror::Error;

/// Errors that can occur while persisting snapshots
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for writing run artifacts to durable storage.
pub trait DecisionStore: Send + Sync {
    /// Write the complete decision snapshot.
    fn save_decision(&self, decision: &Decision) -> Result<(), PersistError>;

    /// Write the full ordered audit log snapshot.
    fn save_audit_log(&self, audit: &AuditLog) -> Result<(), PersistError>;
}

/// No-op implementation for tests and when persistence is disabled.
pub struct NoDecisionStore;

impl DecisionStore for NoDecisionStore {
    fn save_decision(&self, _decision: &Decision) -> Result<(), PersistError> {
        Ok(())
    }

    fn save_audit_log(&self, _audit: &AuditLog) -> Result<(), PersistError> {
        Ok(())
    }
}
