use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ReasoningError;
use crate::config::Environment;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// A single-prompt request/response reasoning service
#[async_trait]
pub trait ReasoningClient: Send + Sync {
    /// Send `prompt` as a single user message and return the trimmed reply
    async fn invoke(&self, prompt: &str, model: &str) -> Result<String, ReasoningError>;

    fn name(&self) -> &str;
}

#[async_trait]
impl<T: ReasoningClient + ?Sized> ReasoningClient for std::sync::Arc<T> {
    async fn invoke(&self, prompt: &str, model: &str) -> Result<String, ReasoningError> {
        (**self).invoke(prompt, model).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Configuration for the OpenAI-compatible chat completions client
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key (from OPENAI_API_KEY)
    pub api_key: String,
    /// API root, without the trailing `/chat/completions`
    pub base_url: String,
    /// Sampling temperature; 0 asks for deterministic output
    pub temperature: f64,
    /// Transport timeout for a single call
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Create config from OPENAI_API_KEY / OPENAI_BASE_URL
    pub fn from_environment(env: &Environment) -> Result<Self, ReasoningError> {
        let api_key = env
            .get("OPENAI_API_KEY")
            .ok_or(ReasoningError::CredentialMissing)?;
        let base_url = env
            .get("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(api_key, base_url))
    }

    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            temperature: 0.0,
            timeout: Duration::from_secs(60),
        }
    }
}

/// OpenAI chat completions client
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, ReasoningError> {
        if config.api_key.trim().is_empty() {
            return Err(ReasoningError::CredentialMissing);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ReasoningError::ServiceUnavailable(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn build_request(&self, prompt: &str, model: &str) -> ChatRequest {
        ChatRequest {
            model: model.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
        }
    }
}

#[async_trait]
impl ReasoningClient for OpenAiClient {
    async fn invoke(&self, prompt: &str, model: &str) -> Result<String, ReasoningError> {
        let request = self.build_request(prompt, model);
        debug!(model, prompt_chars = prompt.len(), "Sending chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ReasoningError::ServiceError(format!(
                "OpenAI API error: {} - {}",
                status,
                body.trim()
            )));
        }

        let response: ChatResponse = response.json().await.map_err(|e| {
            ReasoningError::ServiceError(format!("Failed to parse OpenAI response: {}", e))
        })?;

        extract_content(response)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// Trimmed text of the first choice; empty or missing content is an error
fn extract_content(response: ChatResponse) -> Result<String, ReasoningError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| ReasoningError::ServiceError("No text content in response".to_string()))
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
