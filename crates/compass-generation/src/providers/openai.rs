//! OpenAI-compatible chat-completion provider over `{base_url}/chat/completions`.

use std::time::Duration;

use compass_core::config::GenerationConfig;
use compass_core::errors::{CompassResult, ConfigError, GenerationError};
use compass_core::models::{ChatMessage, ChatRequest};
use compass_core::traits::IChatProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct OpenAiChatProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

impl<'a> From<&'a ChatRequest> for CompletionRequest<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl OpenAiChatProvider {
    pub fn new(config: &GenerationConfig, api_key: impl Into<String>) -> CompassResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "generation.base_url".to_string(),
                message: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }
}

fn failed(reason: String) -> GenerationError {
    GenerationError::CompletionFailed { reason }
}

impl IChatProvider for OpenAiChatProvider {
    fn complete(&self, request: &ChatRequest) -> CompassResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest::from(request))
            .send()
            .map_err(|e| failed(format!("HTTP error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(failed(format!("API returned {status}: {body}")).into());
        }

        let parsed: CompletionResponse = response
            .json()
            .map_err(|e| failed(format!("JSON parse error: {e}")))?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(GenerationError::EmptyCompletion)?;

        debug!(model = %request.model, chars = text.len(), "chat completion received");
        Ok(text.trim().to_string())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
