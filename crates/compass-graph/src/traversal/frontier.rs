//! Multi-hop breadth-first expansion from one source node.
//!
//! Hop 1 is identical to `neighbors::get`. From hop 2 on, only nodes not yet
//! reached from this source are queried, and facts pointing back at an
//! already-reached node are dropped, so cycles terminate.

use std::collections::HashSet;

use compass_core::traits::GraphSession;

use super::{neighbors, to_fact, ExpansionLimits, SourceExpansion};
use crate::expander::NodeFailure;

pub fn expand(
    session: &mut dyn GraphSession,
    source_id: &str,
    depth: usize,
    limits: &ExpansionLimits,
) -> SourceExpansion {
    let mut result = neighbors::get(session, source_id, limits);
    if depth <= 1 || !result.failures.is_empty() {
        return result;
    }
    result.facts.truncate(limits.max_nodes_per_source);

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(source_id.to_string());
    let mut frontier: Vec<String> = Vec::new();
    for fact in &result.facts {
        if !fact.target_id.is_empty() && visited.insert(fact.target_id.clone()) {
            frontier.push(fact.target_id.clone());
        }
    }

    for hop in 2..=depth {
        let mut next = Vec::new();

        for node_id in &frontier {
            if result.facts.len() >= limits.max_nodes_per_source {
                return result;
            }

            let rows = match session.neighbors(node_id, limits.max_neighbors_per_node) {
                Ok(rows) => rows,
                Err(error) => {
                    result.failures.push(NodeFailure {
                        node_id: node_id.clone(),
                        error,
                    });
                    continue;
                }
            };

            for row in rows.into_iter().take(limits.max_neighbors_per_node) {
                let target = row.id.clone().unwrap_or_default();
                if target.is_empty() || !visited.insert(target.clone()) {
                    continue;
                }
                next.push(target);
                result
                    .facts
                    .push(to_fact(node_id, row, hop, limits.max_description_chars));
                if result.facts.len() >= limits.max_nodes_per_source {
                    return result;
                }
            }
        }

        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    result
}
