use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::IndexSpec;

/// Vector index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    pub index_name: String,
    /// Similarity metric used when the index has to be created.
    pub metric: String,
    pub cloud: String,
    pub region: String,
    /// Number of matches requested per query.
    pub top_k: usize,
    /// Create the index on startup when it does not exist yet.
    pub create_if_missing: bool,
    pub api_key: Option<String>,
    /// Control-plane URL used to list, describe and create indexes.
    pub control_url: String,
    pub timeout_secs: u64,
}

impl VectorConfig {
    /// Index creation parameters for the given vector dimension.
    pub fn index_spec(&self, dimension: usize) -> IndexSpec {
        IndexSpec {
            name: self.index_name.clone(),
            dimension,
            metric: self.metric.clone(),
            cloud: self.cloud.clone(),
            region: self.region.clone(),
        }
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            index_name: defaults::DEFAULT_INDEX_NAME.to_string(),
            metric: defaults::DEFAULT_METRIC.to_string(),
            cloud: defaults::DEFAULT_CLOUD.to_string(),
            region: defaults::DEFAULT_REGION.to_string(),
            top_k: defaults::DEFAULT_TOP_K,
            create_if_missing: defaults::DEFAULT_CREATE_IF_MISSING,
            api_key: None,
            control_url: defaults::DEFAULT_PINECONE_CONTROL_URL.to_string(),
            timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
