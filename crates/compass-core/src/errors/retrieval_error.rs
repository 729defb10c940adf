/// Vector retrieval errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RetrievalError {
    #[error("no embedding available for query: {reason}")]
    EmbeddingUnavailable { reason: String },

    #[error("vector query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("index not found: {name}")]
    IndexNotFound { name: String },

    #[error("index operation failed for {name}: {reason}")]
    IndexOperationFailed { name: String, reason: String },

    #[error("top_k must be greater than zero")]
    InvalidTopK,
}
