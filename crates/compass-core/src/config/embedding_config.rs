use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding provider and cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding model identifier.
    pub model: String,
    /// Expected vector dimension. Every cached or indexed vector has this length.
    pub dimensions: usize,
    /// Maximum number of cached query embeddings.
    pub cache_capacity: u64,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            cache_capacity: defaults::DEFAULT_EMBEDDING_CACHE_CAPACITY,
            base_url: defaults::DEFAULT_OPENAI_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
