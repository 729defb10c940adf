//! AnswerGenerator: prompt in, answer text out.

use std::sync::Arc;

use compass_core::config::GenerationConfig;
use compass_core::errors::{CompassError, CompassResult, GenerationError};
use compass_core::models::{ChatRequest, Prompt};
use compass_core::traits::IChatProvider;
use tracing::{debug, warn};

pub struct AnswerGenerator {
    provider: Arc<dyn IChatProvider>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnswerGenerator {
    pub fn new(provider: Arc<dyn IChatProvider>, config: &GenerationConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// The request sent for `prompt`.
    pub fn request_for(&self, prompt: &Prompt) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: prompt.messages.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Answer text, or the typed failure. Blank completions count as failures.
    pub fn try_generate(&self, prompt: &Prompt) -> CompassResult<String> {
        let text = self.provider.complete(&self.request_for(prompt))?;
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyCompletion.into());
        }
        debug!(provider = self.provider.name(), chars = text.len(), "completion received");
        Ok(text)
    }

    /// Answer text. A failed call yields a message describing the failure.
    pub fn generate(&self, prompt: &Prompt) -> String {
        self.try_generate(prompt).unwrap_or_else(|e| {
            warn!(provider = self.provider.name(), error = %e, "answer generation failed");
            failure_answer(&e)
        })
    }
}

/// Text shown to the user in place of an answer when generation fails.
pub fn failure_answer(error: &CompassError) -> String {
    format!("Chat completion error: {error}")
}
