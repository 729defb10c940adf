/// Embedding subsystem errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider {provider} failed: {reason}")]
    ProviderFailed { provider: String, reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding provider {provider} returned no vector")]
    EmptyResponse { provider: String },
}
