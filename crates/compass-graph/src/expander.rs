//! GraphExpander: bounded neighborhood expansion for a batch of node ids.
//!
//! With `max_concurrency == 1` the whole batch runs through one session on
//! the calling thread. Above that, the batch is split into at most
//! `max_concurrency` contiguous chunks, each expanded in its own session on a
//! dedicated rayon pool, and chunk results are concatenated in input order.
//! Either way the output order is identical.

use std::sync::Arc;

use compass_core::config::GraphConfig;
use compass_core::constants::MAX_GRAPH_TRAVERSAL_DEPTH;
use compass_core::errors::{CompassError, CompassResult, ConfigError};
use compass_core::models::GraphFact;
use compass_core::traits::IGraphStore;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use crate::traversal::{frontier, ExpansionLimits};

/// A node whose neighborhood lookup failed.
#[derive(Debug, Clone)]
pub struct NodeFailure {
    pub node_id: String,
    pub error: CompassError,
}

/// Facts gathered for a batch, plus the nodes that could not be expanded.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    pub facts: Vec<GraphFact>,
    pub failures: Vec<NodeFailure>,
}

impl Expansion {
    fn absorb(&mut self, other: Expansion) {
        self.facts.extend(other.facts);
        self.failures.extend(other.failures);
    }
}

pub struct GraphExpander {
    store: Arc<dyn IGraphStore>,
    limits: ExpansionLimits,
    max_concurrency: usize,
    pool: Option<ThreadPool>,
}

impl GraphExpander {
    pub fn new(store: Arc<dyn IGraphStore>, config: &GraphConfig) -> CompassResult<Self> {
        let max_concurrency = config.max_concurrency.max(1);
        let pool = if max_concurrency > 1 {
            let pool = ThreadPoolBuilder::new()
                .num_threads(max_concurrency)
                .thread_name(|i| format!("compass-graph-{i}"))
                .build()
                .map_err(|e| ConfigError::ValidationFailed {
                    field: "graph.max_concurrency".to_string(),
                    message: format!("thread pool setup failed: {e}"),
                })?;
            Some(pool)
        } else {
            None
        };

        let mut limits = ExpansionLimits::from(config);
        limits.max_depth = limits.max_depth.clamp(1, MAX_GRAPH_TRAVERSAL_DEPTH);

        Ok(Self {
            store,
            limits,
            max_concurrency,
            pool,
        })
    }

    /// Facts for `node_ids`, in input order. Failures are logged and dropped.
    pub fn expand(&self, node_ids: &[String], depth: usize) -> Vec<GraphFact> {
        self.expand_detailed(node_ids, depth).facts
    }

    /// Facts plus per-node failures. Never fails as a whole.
    pub fn expand_detailed(&self, node_ids: &[String], depth: usize) -> Expansion {
        if depth == 0 || node_ids.is_empty() {
            return Expansion::default();
        }
        let depth = if depth > self.limits.max_depth {
            warn!(
                requested = depth,
                max_depth = self.limits.max_depth,
                "expansion depth clamped"
            );
            self.limits.max_depth
        } else {
            depth
        };

        let expansion = match &self.pool {
            Some(pool) if node_ids.len() > 1 => {
                let chunk_size = node_ids.len().div_ceil(self.max_concurrency);
                let chunks: Vec<Expansion> = pool.install(|| {
                    node_ids
                        .par_chunks(chunk_size)
                        .map(|chunk| self.expand_batch(chunk, depth))
                        .collect()
                });
                chunks.into_iter().fold(Expansion::default(), |mut acc, chunk| {
                    acc.absorb(chunk);
                    acc
                })
            }
            _ => self.expand_batch(node_ids, depth),
        };

        debug!(
            nodes = node_ids.len(),
            depth,
            facts = expansion.facts.len(),
            failures = expansion.failures.len(),
            "graph expansion complete"
        );
        expansion
    }

    /// Expand one contiguous batch inside a single session.
    fn expand_batch(&self, node_ids: &[String], depth: usize) -> Expansion {
        let mut session = match self.store.open_session() {
            Ok(session) => session,
            Err(error) => {
                warn!(nodes = node_ids.len(), error = %error, "graph session unavailable");
                return Expansion {
                    facts: Vec::new(),
                    failures: node_ids
                        .iter()
                        .map(|id| NodeFailure {
                            node_id: id.clone(),
                            error: error.clone(),
                        })
                        .collect(),
                };
            }
        };

        let mut expansion = Expansion::default();
        for node_id in node_ids {
            let source = frontier::expand(session.as_mut(), node_id, depth, &self.limits);
            for failure in &source.failures {
                warn!(node_id = %failure.node_id, error = %failure.error, "neighborhood lookup failed");
            }
            expansion.facts.extend(source.facts);
            expansion.failures.extend(source.failures);
        }
        expansion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::fakes::InMemoryGraphStore;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn pagoda_store() -> InMemoryGraphStore {
        let mut store = InMemoryGraphStore::new();
        store.add_node("A", "Tran Quoc Pagoda", "Oldest pagoda in Hanoi");
        store.add_node("B", "West Lake", "Largest lake in Hanoi");
        store.add_edge("A", "NEAR", "B");
        store
    }

    #[test]
    fn direct_neighbor_becomes_a_fact() {
        let expander = GraphExpander::new(Arc::new(pagoda_store()), &GraphConfig::default()).unwrap();
        let facts = expander.expand(&ids(&["A"]), 1);

        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].source_id, "A");
        assert_eq!(facts[0].relation, "NEAR");
        assert_eq!(facts[0].target_id, "B");
        assert_eq!(facts[0].target_name, "West Lake");
        assert_eq!(facts[0].hop, 1);
    }

    #[test]
    fn edges_are_followed_in_both_directions() {
        let expander = GraphExpander::new(Arc::new(pagoda_store()), &GraphConfig::default()).unwrap();
        let facts = expander.expand(&ids(&["B"]), 1);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].target_id, "A");
    }

    #[test]
    fn depth_zero_yields_nothing() {
        let store = Arc::new(pagoda_store());
        let expander = GraphExpander::new(store.clone(), &GraphConfig::default()).unwrap();
        assert!(expander.expand(&ids(&["A"]), 0).is_empty());
        assert_eq!(store.sessions_opened(), 0);
    }

    #[test]
    fn empty_input_opens_no_session() {
        let store = Arc::new(pagoda_store());
        let expander = GraphExpander::new(store.clone(), &GraphConfig::default()).unwrap();
        assert!(expander.expand(&[], 1).is_empty());
        assert_eq!(store.sessions_opened(), 0);
    }

    #[test]
    fn unknown_node_contributes_no_facts_and_no_failure() {
        let expander = GraphExpander::new(Arc::new(pagoda_store()), &GraphConfig::default()).unwrap();
        let expansion = expander.expand_detailed(&ids(&["missing"]), 1);
        assert!(expansion.facts.is_empty());
        assert!(expansion.failures.is_empty());
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let mut store = InMemoryGraphStore::new();
        store.add_node("A", "Hanoi", "");
        store.add_node("B", "Old Quarter", &"x".repeat(1000));
        store.add_edge("A", "CONTAINS", "B");

        let expander = GraphExpander::new(Arc::new(store), &GraphConfig::default()).unwrap();
        let facts = expander.expand(&ids(&["A"]), 1);
        assert_eq!(facts[0].target_description.chars().count(), 400);
    }

    #[test]
    fn session_failure_marks_every_node_in_the_batch() {
        let store = InMemoryGraphStore::new().refusing_sessions();
        let expander = GraphExpander::new(Arc::new(store), &GraphConfig::default()).unwrap();
        let expansion = expander.expand_detailed(&ids(&["A", "B"]), 1);

        assert!(expansion.facts.is_empty());
        let failed: Vec<&str> = expansion.failures.iter().map(|f| f.node_id.as_str()).collect();
        assert_eq!(failed, vec!["A", "B"]);
    }

    #[test]
    fn requested_depth_is_clamped_to_max() {
        let mut store = InMemoryGraphStore::new();
        for (id, name) in [("n1", "One"), ("n2", "Two"), ("n3", "Three"), ("n4", "Four"), ("n5", "Five")] {
            store.add_node(id, name, "");
        }
        store.add_edge("n1", "NEXT", "n2");
        store.add_edge("n2", "NEXT", "n3");
        store.add_edge("n3", "NEXT", "n4");
        store.add_edge("n4", "NEXT", "n5");

        let config = GraphConfig {
            max_depth: 2,
            ..Default::default()
        };
        let expander = GraphExpander::new(Arc::new(store), &config).unwrap();
        let facts = expander.expand(&ids(&["n1"]), 9);

        let reached: Vec<&str> = facts.iter().map(|f| f.target_id.as_str()).collect();
        assert_eq!(reached, vec!["n2", "n3"]);
    }

    #[test]
    fn sequential_expander_has_no_pool() {
        let expander = GraphExpander::new(Arc::new(pagoda_store()), &GraphConfig::default()).unwrap();
        assert!(expander.pool.is_none());

        let config = GraphConfig {
            max_concurrency: 4,
            ..Default::default()
        };
        let expander = GraphExpander::new(Arc::new(pagoda_store()), &config).unwrap();
        assert!(expander.pool.is_some());
    }
}
