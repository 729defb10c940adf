use std::sync::Arc;

use compass_core::config::GraphConfig;
use compass_graph::GraphExpander;
use proptest::prelude::*;
use test_fixtures::fakes::InMemoryGraphStore;

fn node(i: usize) -> String {
    format!("n{i:02}")
}

fn build_store(nodes: usize, edges: &[(usize, usize)]) -> InMemoryGraphStore {
    let mut store = InMemoryGraphStore::new();
    for i in 0..nodes {
        store.add_node(&node(i), &format!("Place {i}"), "somewhere in Vietnam");
    }
    for &(s, t) in edges {
        store.add_edge(&node(s % nodes), "NEAR", &node(t % nodes));
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn parallel_matches_sequential(
        edges in prop::collection::vec((0usize..20, 0usize..20), 0..60),
        batch in prop::collection::vec(0usize..24, 0..12),
        concurrency in 2usize..6,
        depth in 1usize..4,
    ) {
        let batch: Vec<String> = batch.into_iter().map(node).collect();
        let config = GraphConfig { max_depth: 3, ..Default::default() };

        let sequential = GraphExpander::new(Arc::new(build_store(20, &edges)), &config)
            .unwrap()
            .expand(&batch, depth);

        let parallel_config = GraphConfig { max_concurrency: concurrency, ..config };
        let parallel = GraphExpander::new(Arc::new(build_store(20, &edges)), &parallel_config)
            .unwrap()
            .expand(&batch, depth);

        prop_assert_eq!(parallel, sequential);
    }

    #[test]
    fn direct_neighbors_never_exceed_cap(
        edges in prop::collection::vec((0usize..8, 0usize..8), 0..80),
        cap in 1usize..12,
    ) {
        let config = GraphConfig { max_neighbors_per_node: cap, ..Default::default() };
        let expander = GraphExpander::new(Arc::new(build_store(8, &edges)), &config).unwrap();

        for i in 0..8 {
            let facts = expander.expand(&[node(i)], 1);
            prop_assert!(facts.len() <= cap);
            prop_assert!(facts.iter().all(|f| f.hop == 1 && f.source_id == node(i)));
        }
    }

    #[test]
    fn deeper_hops_never_revisit(
        edges in prop::collection::vec((0usize..10, 0usize..10), 0..40),
        source in 0usize..10,
    ) {
        let config = GraphConfig { max_depth: 4, ..Default::default() };
        let expander = GraphExpander::new(Arc::new(build_store(10, &edges)), &config).unwrap();
        let facts = expander.expand(&[node(source)], 4);

        let mut seen = std::collections::HashSet::new();
        seen.insert(node(source));
        for fact in facts.iter().filter(|f| f.hop == 1) {
            seen.insert(fact.target_id.clone());
        }
        for fact in facts.iter().filter(|f| f.hop > 1) {
            prop_assert!(seen.insert(fact.target_id.clone()), "revisited {}", fact.target_id);
        }
        prop_assert!(facts.len() <= config.max_nodes_per_source.max(config.max_neighbors_per_node));
    }
}
