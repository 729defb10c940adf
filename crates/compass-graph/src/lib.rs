//! # compass-graph
//!
//! Expands vector matches with their neighborhood in the knowledge graph.
//! `GraphExpander` drives per-node lookups through an `IGraphStore` session;
//! `neo4j` provides the HTTP-backed store.

pub mod expander;
pub mod neo4j;
pub mod traversal;

pub use expander::{Expansion, GraphExpander, NodeFailure};
pub use neo4j::Neo4jHttpStore;
pub use traversal::ExpansionLimits;
