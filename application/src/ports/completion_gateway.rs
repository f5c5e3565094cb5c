//! Completion gateway port
//!
//! Defines the interface for requesting text completions from a language
//! model provider. The pipeline treats any returned text as valid content;
//! errors surfacing here are folded into fail-soft response text by the
//! use case rather than aborting a run.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a gateway call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response payload: {0}")]
    InvalidResponse(String),

    #[error("Missing API credentials: {0}")]
    MissingCredentials(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for text completion
///
/// This port defines how the application layer requests completions.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Generate a completion for `prompt` under the given role-defining
    /// system instruction. An empty instruction means the adapter's
    /// default assistant persona.
    async fn generate(
        &self,
        role_instruction: &str,
        prompt: &str,
    ) -> Result<String, GatewayError>;
}
