/// Placeholder rendered for metadata fields a match does not carry.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Hard ceiling on multi-hop graph expansion, regardless of config.
pub const MAX_GRAPH_TRAVERSAL_DEPTH: usize = 5;

/// Statement used by connectivity checks against the graph store.
pub const GRAPH_PING_STATEMENT: &str = "RETURN 'Connected to Neo4j!' AS message";
