//! # compass-embeddings
//!
//! Turns query text into vectors. `EmbeddingCache` memoizes provider calls
//! per exact input string; `providers` holds the HTTP-backed implementations.

pub mod cache;
pub mod providers;

pub use cache::{CacheStats, EmbeddingCache};
pub use providers::OpenAiEmbeddingProvider;
