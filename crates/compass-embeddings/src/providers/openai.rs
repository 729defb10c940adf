//! OpenAI-compatible embedding provider.
//!
//! Blocking HTTP client against `{base_url}/embeddings`. One text per request,
//! one attempt per call; failures surface as `EmbeddingError::ProviderFailed`.

use std::time::Duration;

use compass_core::config::EmbeddingConfig;
use compass_core::errors::{CompassResult, ConfigError, EmbeddingError};
use compass_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct OpenAiEmbeddingProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    model: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

impl OpenAiEmbeddingProvider {
    /// Build a provider from config and an API key.
    pub fn new(config: &EmbeddingConfig, api_key: impl Into<String>) -> CompassResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "embedding.base_url".to_string(),
                message: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/embeddings", config.base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: config.model.clone(),
            dimensions: config.dimensions,
        })
    }

    fn failed(&self, reason: String) -> EmbeddingError {
        EmbeddingError::ProviderFailed {
            provider: self.model.clone(),
            reason,
        }
    }
}

impl IEmbeddingProvider for OpenAiEmbeddingProvider {
    fn embed(&self, text: &str) -> CompassResult<Vec<f32>> {
        let body = EmbedRequest {
            model: &self.model,
            input: [text],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| self.failed(format!("HTTP error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(self.failed(format!("API returned {status}: {body}")).into());
        }

        let parsed: EmbedResponse = response
            .json()
            .map_err(|e| self.failed(format!("JSON parse error: {e}")))?;

        let embedding = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::EmptyResponse {
                provider: self.model.clone(),
            })?;

        debug!(model = %self.model, dims = embedding.len(), "embedding received");
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }
}
