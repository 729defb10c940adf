use serde::{Deserialize, Serialize};

/// Parameters for idempotent index creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSpec {
    pub name: String,
    pub dimension: usize,
    /// Similarity metric, e.g. "cosine".
    pub metric: String,
    /// Deployment target: cloud provider and region.
    pub cloud: String,
    pub region: String,
}

/// Outcome of `ensure_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Created,
    AlreadyExists,
}

/// A nearest-neighbor request.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorQuery {
    pub vector: Vec<f32>,
    pub top_k: usize,
    pub include_metadata: bool,
    pub include_values: bool,
}

impl VectorQuery {
    /// Metadata-only query: raw vector values are never requested back.
    pub fn new(vector: Vec<f32>, top_k: usize) -> Self {
        Self {
            vector,
            top_k,
            include_metadata: true,
            include_values: false,
        }
    }
}
