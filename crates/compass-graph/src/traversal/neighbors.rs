//! Direct neighbors (depth=1), any direction and relation type.

use compass_core::traits::GraphSession;

use super::{to_fact, ExpansionLimits, SourceExpansion};
use crate::expander::NodeFailure;

/// Direct neighbors of `source_id`, in store order, capped per node.
///
/// Every row the store returns becomes a fact; a failed lookup yields no
/// facts and one failure.
pub fn get(session: &mut dyn GraphSession, source_id: &str, limits: &ExpansionLimits) -> SourceExpansion {
    let mut result = SourceExpansion::default();

    match session.neighbors(source_id, limits.max_neighbors_per_node) {
        Ok(rows) => {
            result.facts = rows
                .into_iter()
                .take(limits.max_neighbors_per_node)
                .map(|row| to_fact(source_id, row, 1, limits.max_description_chars))
                .collect();
        }
        Err(error) => result.failures.push(NodeFailure {
            node_id: source_id.to_string(),
            error,
        }),
    }

    result
}
