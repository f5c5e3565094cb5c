//! Safety gate
//!
//! A pure function of the aggregated confidence, risk list, and average
//! safety score. Reusable standalone; no state, no side effects.

use serde::{Deserialize, Serialize};

/// Average safety score below which a decision is blocked outright.
pub const BLOCK_SAFETY_THRESHOLD: f64 = 6.0;

/// Confidence below which a decision needs human approval.
pub const APPROVAL_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Number of risks tolerated before a decision needs human approval.
pub const MAX_TOLERATED_RISKS: usize = 2;

/// Final usability classification of a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyGateStatus {
    /// Safe to use as-is
    Approved,
    /// Needs human sign-off before use
    RequiresApproval,
    /// Must not be used
    Blocked,
}

impl SafetyGateStatus {
    /// Classify an aggregated result.
    ///
    /// Precedence is strict: the safety check runs first and overrides
    /// everything else, including a high confidence.
    pub fn evaluate(confidence: f64, risks: &[String], avg_safety: f64) -> Self {
        if avg_safety < BLOCK_SAFETY_THRESHOLD {
            SafetyGateStatus::Blocked
        } else if confidence < APPROVAL_CONFIDENCE_THRESHOLD || risks.len() > MAX_TOLERATED_RISKS {
            SafetyGateStatus::RequiresApproval
        } else {
            SafetyGateStatus::Approved
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, SafetyGateStatus::Approved)
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, SafetyGateStatus::Blocked)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyGateStatus::Approved => "APPROVED",
            SafetyGateStatus::RequiresApproval => "REQUIRES_APPROVAL",
            SafetyGateStatus::Blocked => "BLOCKED",
        }
    }
}

impl std::fmt::Display for SafetyGateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
