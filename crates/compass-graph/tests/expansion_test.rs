//! Expansion behavior against the in-memory graph store.

use std::sync::Arc;

use compass_core::config::GraphConfig;
use compass_graph::GraphExpander;
use test_fixtures::fakes::InMemoryGraphStore;
use test_fixtures::{load_fixture, GraphFixture};

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn hub_store() -> InMemoryGraphStore {
    let fixture: GraphFixture = load_fixture("graphs/hub_and_spokes.json");
    InMemoryGraphStore::from_fixture(&fixture)
}

fn with_concurrency(n: usize) -> GraphConfig {
    GraphConfig {
        max_concurrency: n,
        ..Default::default()
    }
}

#[test]
fn busy_node_is_capped_at_ten_neighbors() {
    let expander = GraphExpander::new(Arc::new(hub_store()), &GraphConfig::default()).unwrap();
    let facts = expander.expand(&ids(&["hub"]), 1);

    assert_eq!(facts.len(), 10);
    assert!(facts.iter().all(|f| f.source_id == "hub" && f.relation == "NEAR"));
    assert_eq!(facts[0].target_id, "spoke_01");
    assert_eq!(facts[9].target_id, "spoke_10");
}

#[test]
fn isolated_node_yields_no_facts() {
    let expander = GraphExpander::new(Arc::new(hub_store()), &GraphConfig::default()).unwrap();
    let expansion = expander.expand_detailed(&ids(&["loner"]), 1);
    assert!(expansion.facts.is_empty());
    assert!(expansion.failures.is_empty());
}

#[test]
fn one_failing_node_does_not_sink_the_batch() {
    let store = Arc::new(hub_store().failing_on("spoke_02"));
    let expander = GraphExpander::new(store.clone(), &GraphConfig::default()).unwrap();
    let expansion = expander.expand_detailed(&ids(&["spoke_01", "spoke_02", "spoke_03"]), 1);

    let sources: Vec<&str> = expansion.facts.iter().map(|f| f.source_id.as_str()).collect();
    assert_eq!(sources, vec!["spoke_01", "spoke_03"]);
    assert_eq!(expansion.failures.len(), 1);
    assert_eq!(expansion.failures[0].node_id, "spoke_02");
    assert_eq!(store.sessions_opened(), 1);
    assert_eq!(store.sessions_released(), 1);
}

#[test]
fn soft_expand_drops_failures_silently() {
    let store = Arc::new(hub_store().failing_on("hub"));
    let expander = GraphExpander::new(store, &GraphConfig::default()).unwrap();
    let facts = expander.expand(&ids(&["hub", "spoke_05"]), 1);
    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].target_id, "hub");
}

#[test]
fn sequential_batch_uses_one_session_and_releases_it() {
    let store = Arc::new(hub_store());
    let expander = GraphExpander::new(store.clone(), &GraphConfig::default()).unwrap();
    expander.expand(&ids(&["hub", "spoke_01", "spoke_02", "loner"]), 1);

    assert_eq!(store.sessions_opened(), 1);
    assert_eq!(store.sessions_released(), 1);
    assert_eq!(store.lookups(), ids(&["hub", "spoke_01", "spoke_02", "loner"]));
}

#[test]
fn parallel_expansion_preserves_input_order() {
    let batch = ids(&["spoke_07", "hub", "loner", "spoke_01", "spoke_15", "spoke_03", "spoke_11"]);

    let sequential = GraphExpander::new(Arc::new(hub_store()), &with_concurrency(1))
        .unwrap()
        .expand(&batch, 1);

    for n in [2, 3, 4, 16] {
        let store = Arc::new(hub_store());
        let parallel = GraphExpander::new(store.clone(), &with_concurrency(n))
            .unwrap()
            .expand(&batch, 1);
        assert_eq!(parallel, sequential, "max_concurrency = {n}");
        assert!(store.sessions_opened() <= n);
        assert_eq!(store.sessions_opened(), store.sessions_released());
    }
}

#[test]
fn parallel_session_failure_reports_every_node() {
    let store = Arc::new(hub_store().refusing_sessions());
    let expander = GraphExpander::new(store, &with_concurrency(3)).unwrap();
    let expansion = expander.expand_detailed(&ids(&["hub", "spoke_01", "spoke_02", "loner"]), 1);

    assert!(expansion.facts.is_empty());
    let failed: Vec<&str> = expansion.failures.iter().map(|f| f.node_id.as_str()).collect();
    assert_eq!(failed, vec!["hub", "spoke_01", "spoke_02", "loner"]);
}

#[test]
fn second_hop_skips_already_reached_nodes() {
    // Triangle A-B-C plus a tail C-D.
    let mut store = InMemoryGraphStore::new();
    store.add_node("A", "Hanoi", "");
    store.add_node("B", "Hoan Kiem Lake", "");
    store.add_node("C", "Old Quarter", "");
    store.add_node("D", "Dong Xuan Market", "");
    store.add_edge("A", "CONTAINS", "B");
    store.add_edge("A", "CONTAINS", "C");
    store.add_edge("B", "NEAR", "C");
    store.add_edge("C", "CONTAINS", "D");

    let config = GraphConfig {
        max_depth: 3,
        ..Default::default()
    };
    let expander = GraphExpander::new(Arc::new(store), &config).unwrap();

    let one_hop = expander.expand(&ids(&["A"]), 1);
    let two_hops = expander.expand(&ids(&["A"]), 2);

    assert_eq!(two_hops[..one_hop.len()], one_hop[..]);
    let deeper: Vec<(&str, &str, usize)> = two_hops[one_hop.len()..]
        .iter()
        .map(|f| (f.source_id.as_str(), f.target_id.as_str(), f.hop))
        .collect();
    assert_eq!(deeper, vec![("C", "D", 2)]);

    let three_hops = expander.expand(&ids(&["A"]), 3);
    assert_eq!(three_hops, two_hops);
}

#[test]
fn multi_hop_respects_per_source_cap() {
    let config = GraphConfig {
        max_depth: 2,
        max_nodes_per_source: 6,
        ..Default::default()
    };
    let expander = GraphExpander::new(Arc::new(hub_store()), &config).unwrap();
    let facts = expander.expand(&ids(&["spoke_01"]), 2);

    // spoke_01 -> hub, then hub's other spokes until the cap.
    assert_eq!(facts.len(), 6);
    assert_eq!(facts[0].target_id, "hub");
    assert!(facts[1..].iter().all(|f| f.source_id == "hub" && f.hop == 2));
}

#[test]
fn failure_beyond_first_hop_keeps_earlier_facts() {
    let store = Arc::new(hub_store().failing_on("hub"));
    let config = GraphConfig {
        max_depth: 2,
        ..Default::default()
    };
    let expander = GraphExpander::new(store, &config).unwrap();
    let expansion = expander.expand_detailed(&ids(&["spoke_04"]), 2);

    assert_eq!(expansion.facts.len(), 1);
    assert_eq!(expansion.facts[0].target_id, "hub");
    assert_eq!(expansion.failures.len(), 1);
    assert_eq!(expansion.failures[0].node_id, "hub");
}
