use crate::errors::CompassResult;
use crate::models::ChatRequest;

/// Chat-completion provider.
pub trait IChatProvider: Send + Sync {
    /// Generate a completion for the request. One attempt, no retries.
    fn complete(&self, request: &ChatRequest) -> CompassResult<String>;

    fn name(&self) -> &str;
}
