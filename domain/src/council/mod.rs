//! Council decision domain
//!
//! This module contains the core concepts for council-based decision making.
//!
//! # Core Concepts
//!
//! ## Agent Panel
//! A fixed roster of differently-instructed agent roles each answers the
//! same query, producing one timestamped [`AgentResponse`] per role.
//!
//! ## Judge Panel
//! A fixed roster of judge roles evaluates the full answer set and names a
//! winner with a confidence and per-criterion sub-scores, producing one
//! [`JudgeScore`] per role (falling back to a neutral score when a judge's
//! output cannot be parsed).
//!
//! ## Decision
//! Judge scores are aggregated by vote into a single winner with an
//! averaged confidence and a derived risk list, then classified by the
//! safety gate.
//!
//! # Pipeline
//!
//! ```text
//! query ──> agents ──> judges ──> tally ──> gate ──> Decision
//!              │           │         │        │          │
//!              └───────────┴─────────┴────────┴──────────┴──> audit log
//! ```
//!
//! [`AgentResponse`]: response::AgentResponse
//! [`JudgeScore`]: score::JudgeScore

pub mod citations;
pub mod decision;
pub mod evaluation;
pub mod gate;
pub mod phase;
pub mod response;
pub mod roster;
pub mod score;
pub mod tally;

// Re-export main types
pub use citations::{NO_CITATIONS_SENTINEL, extract_citations};
pub use decision::Decision;
pub use evaluation::{EvaluationParseError, ParsedEvaluation, parse_evaluation};
pub use gate::SafetyGateStatus;
pub use phase::Phase;
pub use response::AgentResponse;
pub use roster::{AgentRole, CouncilRoster, JudgeRole};
pub use score::JudgeScore;
pub use tally::{AggregatedVerdict, aggregate_scores, average_safety};
