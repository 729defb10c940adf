use serde::{Deserialize, Serialize};

use super::defaults;

/// Graph store and neighborhood expansion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// HTTP endpoint of the graph server.
    pub uri: String,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
    /// Label every expanded node must carry.
    pub node_label: String,
    /// Neighbor rows kept per queried node.
    pub max_neighbors_per_node: usize,
    /// Neighbor descriptions are cut to this many characters.
    pub max_description_chars: usize,
    /// Default expansion depth (hops).
    pub depth: usize,
    /// Largest depth a caller may request.
    pub max_depth: usize,
    /// Total facts kept per source node when depth > 1.
    pub max_nodes_per_source: usize,
    /// Concurrent graph lookups. 1 keeps the pipeline fully sequential.
    pub max_concurrency: usize,
    pub timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: defaults::DEFAULT_GRAPH_URI.to_string(),
            database: defaults::DEFAULT_GRAPH_DATABASE.to_string(),
            user: defaults::DEFAULT_GRAPH_USER.to_string(),
            password: None,
            node_label: defaults::DEFAULT_NODE_LABEL.to_string(),
            max_neighbors_per_node: defaults::DEFAULT_MAX_NEIGHBORS_PER_NODE,
            max_description_chars: defaults::DEFAULT_MAX_DESCRIPTION_CHARS,
            depth: defaults::DEFAULT_GRAPH_DEPTH,
            max_depth: defaults::DEFAULT_MAX_GRAPH_DEPTH,
            max_nodes_per_source: defaults::DEFAULT_MAX_NODES_PER_SOURCE,
            max_concurrency: defaults::DEFAULT_GRAPH_MAX_CONCURRENCY,
            timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
