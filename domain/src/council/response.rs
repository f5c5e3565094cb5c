//! Agent response value object

use crate::util::now_rfc3339;
use serde::{Deserialize, Serialize};

/// Response from a single agent role
///
/// Immutable once created. The response text is stored verbatim, including
/// gateway-reported error strings; the pipeline does not distinguish a
/// short answer from a failure description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Role identifier of the agent that produced this response
    pub agent_id: String,
    /// The response text, verbatim
    pub response: String,
    /// Creation time, RFC 3339
    pub timestamp: String,
}

impl AgentResponse {
    /// Create a response stamped with the current time.
    pub fn new(agent_id: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            response: response.into(),
            timestamp: now_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_creation() {
        let response = AgentResponse::new("agent_analytical", "The answer is 42.");
        assert_eq!(response.agent_id, "agent_analytical");
        assert_eq!(response.response, "The answer is 42.");
        assert!(chrono::DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }

    #[test]
    fn test_error_text_is_stored_verbatim() {
        let response = AgentResponse::new("agent_creative", "Error: connection refused");
        assert_eq!(response.response, "Error: connection refused");
    }
}
