//! Anthropic Messages API gateway adapter
//!
//! Implements the [`CompletionGateway`] port over the Anthropic Messages
//! API. One request per `generate` call: the role instruction goes in the
//! `system` field, the prompt as a single user message.

use async_trait::async_trait;
use council_application::ports::completion_gateway::{CompletionGateway, GatewayError};
use council_domain::CouncilPromptTemplate;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Completion gateway backed by the Anthropic Messages API
pub struct AnthropicGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
}

impl AnthropicGateway {
    /// Create a new gateway for the given model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a gateway with the API key from `ANTHROPIC_API_KEY`.
    pub fn from_env(model: impl Into<String>, max_tokens: u32) -> Result<Self, GatewayError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            GatewayError::MissingCredentials("ANTHROPIC_API_KEY is not set".to_string())
        })?;
        Ok(Self::new(api_key, model, max_tokens))
    }

    /// Override the API base URL (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// First text block of a response, or an error if there is none.
    fn first_text(response: MessagesResponse) -> Result<String, GatewayError> {
        response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .ok_or_else(|| GatewayError::InvalidResponse("no text content block".to_string()))
    }
}

#[async_trait]
impl CompletionGateway for AnthropicGateway {
    async fn generate(
        &self,
        role_instruction: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let system = if role_instruction.is_empty() {
            CouncilPromptTemplate::default_system()
        } else {
            role_instruction
        };

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!("Requesting completion from {} ({})", self.base_url, self.model);

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let payload: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Self::first_text(payload)
    }
}
