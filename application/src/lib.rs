//! Application layer for llm-council
//!
//! This crate contains the orchestration use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    decision_store::{DecisionStore, NoDecisionStore, PersistError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_council::{RunCouncilError, RunCouncilInput, RunCouncilUseCase};
