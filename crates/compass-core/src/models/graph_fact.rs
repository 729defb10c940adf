use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One (source, edge, neighbor) triple pulled from the graph store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFact {
    pub source_id: String,
    pub relation: String,
    pub target_id: String,
    pub target_name: String,
    /// Neighbor description, truncated to the configured character budget.
    pub target_description: String,
    pub target_labels: BTreeSet<String>,
    /// Hop distance from the expanded source (1 for direct neighbors).
    #[serde(default = "default_hop")]
    pub hop: usize,
}

fn default_hop() -> usize {
    1
}

/// Raw neighbor row as returned by a graph session, before truncation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborRecord {
    pub relation: String,
    #[serde(default)]
    pub labels: Vec<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub node_type: Option<String>,
    pub description: Option<String>,
}
