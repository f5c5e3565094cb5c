//! Completion gateway adapters

pub mod anthropic;

pub use anthropic::AnthropicGateway;
