//! Per-source neighborhood traversal inside one graph session.
//!
//! `neighbors` covers depth 1; `frontier` generalizes to multi-hop
//! breadth-first expansion with visited-set cycle avoidance.

pub mod frontier;
pub mod neighbors;

use compass_core::config::GraphConfig;
use compass_core::models::{GraphFact, NeighborRecord};

use crate::expander::NodeFailure;

/// Fan-out bounds applied while expanding a single source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionLimits {
    /// Rows requested per queried node.
    pub max_neighbors_per_node: usize,
    /// Characters kept from each neighbor description.
    pub max_description_chars: usize,
    /// Deepest hop a caller may request.
    pub max_depth: usize,
    /// Total facts per source when depth > 1.
    pub max_nodes_per_source: usize,
}

impl From<&GraphConfig> for ExpansionLimits {
    fn from(config: &GraphConfig) -> Self {
        Self {
            max_neighbors_per_node: config.max_neighbors_per_node,
            max_description_chars: config.max_description_chars,
            max_depth: config.max_depth,
            max_nodes_per_source: config.max_nodes_per_source,
        }
    }
}

/// Facts and failures collected for one source node.
#[derive(Debug, Default)]
pub struct SourceExpansion {
    pub facts: Vec<GraphFact>,
    pub failures: Vec<NodeFailure>,
}

/// Convert a raw neighbor row into a fact seen from `source_id`.
pub(crate) fn to_fact(
    source_id: &str,
    row: NeighborRecord,
    hop: usize,
    max_description_chars: usize,
) -> GraphFact {
    GraphFact {
        source_id: source_id.to_string(),
        relation: row.relation,
        target_id: row.id.unwrap_or_default(),
        target_name: row.name.unwrap_or_default(),
        target_description: truncate_chars(row.description.as_deref().unwrap_or(""), max_description_chars),
        target_labels: row.labels.into_iter().collect(),
        hop,
    }
}

/// First `max` characters of `text`, never splitting a character.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
