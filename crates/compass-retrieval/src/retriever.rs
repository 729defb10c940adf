//! VectorRetriever: query text → top-K scored matches.

use std::sync::Arc;

use compass_core::errors::{CompassResult, RetrievalError};
use compass_core::models::{IndexSpec, IndexStatus, VectorMatch, VectorQuery};
use compass_core::traits::IVectorIndex;
use compass_embeddings::EmbeddingCache;
use tracing::{debug, info, warn};

pub struct VectorRetriever {
    cache: Arc<EmbeddingCache>,
    index: Arc<dyn IVectorIndex>,
}

impl VectorRetriever {
    pub fn new(cache: Arc<EmbeddingCache>, index: Arc<dyn IVectorIndex>) -> Self {
        Self { cache, index }
    }

    /// Top-K matches for `text`, empty when anything upstream failed.
    pub fn query(&self, text: &str, top_k: usize) -> Vec<VectorMatch> {
        match self.search(text, top_k) {
            Ok(matches) => matches,
            Err(e) => {
                warn!(error = %e, top_k, "vector retrieval degraded to no matches");
                Vec::new()
            }
        }
    }

    /// Top-K matches for `text` with typed failures.
    ///
    /// Never calls the index when no embedding is available. Results are in
    /// descending score order; ties keep the index's own order.
    pub fn search(&self, text: &str, top_k: usize) -> CompassResult<Vec<VectorMatch>> {
        if top_k == 0 {
            return Err(RetrievalError::InvalidTopK.into());
        }

        let vector = self
            .cache
            .try_embed(text)
            .map_err(|e| RetrievalError::EmbeddingUnavailable {
                reason: e.to_string(),
            })?;

        let mut matches = self.index.query(&VectorQuery::new(vector, top_k))?;

        // Stable sort keeps provider order among equal scores.
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(top_k);

        debug!(top_k, returned = matches.len(), "vector index returned matches");
        Ok(matches)
    }

    /// Create the backing index if it does not exist yet.
    pub fn ensure_index(&self, spec: &IndexSpec) -> CompassResult<IndexStatus> {
        let status = self.index.ensure_index(spec)?;
        match status {
            IndexStatus::Created => info!(index = %spec.name, dims = spec.dimension, "created index"),
            IndexStatus::AlreadyExists => info!(index = %spec.name, "index already exists"),
        }
        Ok(status)
    }

    /// Names of the indexes reachable with the configured credentials.
    pub fn list_indexes(&self) -> CompassResult<Vec<String>> {
        self.index.list_indexes()
    }
}
