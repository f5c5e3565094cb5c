//! Infrastructure layer for llm-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod persistence;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, GatewayConfig, OutputConfig};
pub use persistence::JsonSnapshotStore;
pub use providers::AnthropicGateway;
