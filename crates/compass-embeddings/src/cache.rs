//! Pipeline-owned query embedding cache backed by moka.
//!
//! Keys are the exact query strings (no case or whitespace normalization).
//! Capacity-bounded with TinyLFU admission; concurrent misses on one key
//! share a single provider call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use compass_core::config::EmbeddingConfig;
use compass_core::errors::{CompassError, CompassResult, EmbeddingError};
use compass_core::models::EmbeddingVector;
use compass_core::traits::IEmbeddingProvider;
use moka::sync::Cache;
use tracing::{debug, warn};

/// Point-in-time cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

/// Memoizes text → vector lookups in front of an embedding provider.
pub struct EmbeddingCache {
    provider: Arc<dyn IEmbeddingProvider>,
    cache: Cache<String, EmbeddingVector>,
    dimensions: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl EmbeddingCache {
    /// Create a cache sized and validated from configuration.
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        Self::with_capacity(provider, config.dimensions, config.cache_capacity)
    }

    /// Create a cache holding at most `capacity` vectors of length `dimensions`.
    pub fn with_capacity(
        provider: Arc<dyn IEmbeddingProvider>,
        dimensions: usize,
        capacity: u64,
    ) -> Self {
        Self {
            provider,
            cache: Cache::builder().max_capacity(capacity).build(),
            dimensions,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Embed `text`, degrading to an empty vector when no embedding is available.
    ///
    /// Callers treat an empty vector as "no embedding" and short-circuit.
    pub fn embed(&self, text: &str) -> EmbeddingVector {
        match self.try_embed(text) {
            Ok(vec) => vec,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "embedding unavailable");
                Vec::new()
            }
        }
    }

    /// Embed `text`, returning the typed failure on a miss that could not be filled.
    ///
    /// Failed lookups are never cached, so the next call retries the provider.
    pub fn try_embed(&self, text: &str) -> CompassResult<EmbeddingVector> {
        if let Some(vec) = self.cache.get(text) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(chars = text.chars().count(), "embedding cache hit");
            return Ok(vec);
        }

        self.cache
            .try_get_with(text.to_string(), || {
                self.misses.fetch_add(1, Ordering::Relaxed);
                self.fetch(text)
            })
            .map_err(|e| CompassError::from((*e).clone()))
    }

    fn fetch(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
        let provider = self.provider.name().to_string();
        let vec = self.provider.embed(text).map_err(|e| match e {
            CompassError::EmbeddingError(inner) => inner,
            other => EmbeddingError::ProviderFailed {
                provider: provider.clone(),
                reason: other.to_string(),
            },
        })?;

        if vec.is_empty() {
            return Err(EmbeddingError::EmptyResponse { provider });
        }
        if vec.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: vec.len(),
            });
        }

        debug!(provider = %provider, dims = vec.len(), "embedding cached");
        Ok(vec)
    }

    /// Whether `text` currently has a cached vector.
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains_key(text)
    }

    /// Hit/miss counters and current entry count.
    pub fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
