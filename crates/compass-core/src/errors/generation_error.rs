/// Answer generation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("chat completion failed: {reason}")]
    CompletionFailed { reason: String },

    #[error("chat completion returned no content")]
    EmptyCompletion,
}
