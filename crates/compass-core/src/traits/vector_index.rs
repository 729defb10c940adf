use crate::errors::CompassResult;
use crate::models::{IndexSpec, IndexStatus, VectorMatch, VectorQuery};

/// Managed nearest-neighbor store with metadata.
pub trait IVectorIndex: Send + Sync {
    /// Create the index if no index with that name exists. Idempotent.
    fn ensure_index(&self, spec: &IndexSpec) -> CompassResult<IndexStatus>;

    /// Names of all indexes visible to the credentials in use.
    fn list_indexes(&self) -> CompassResult<Vec<String>>;

    /// Nearest-neighbor query. Matches come back in descending score order.
    fn query(&self, query: &VectorQuery) -> CompassResult<Vec<VectorMatch>>;
}
