use super::{ConfigError, EmbeddingError, GenerationError, GraphError, RetrievalError};

/// Top-level error for every fallible Compass operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompassError {
    #[error(transparent)]
    EmbeddingError(#[from] EmbeddingError),

    #[error(transparent)]
    RetrievalError(#[from] RetrievalError),

    #[error(transparent)]
    GraphError(#[from] GraphError),

    #[error(transparent)]
    GenerationError(#[from] GenerationError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CompassError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Convenience alias used across the workspace.
pub type CompassResult<T> = Result<T, CompassError>;
