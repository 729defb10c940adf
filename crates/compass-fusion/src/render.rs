//! Line renderers for each evidence view.

use compass_core::constants::UNKNOWN_FIELD;
use compass_core::models::{GraphFact, VectorMatch};

/// `name (type) in city`, with `Unknown` for any missing field.
pub fn summary_entry(m: &VectorMatch) -> String {
    let field = |key: &str| m.meta_text(key).unwrap_or_else(|| UNKNOWN_FIELD.to_string());
    format!("{} ({}) in {}", field("name"), field("type"), field("city"))
}

/// `- id: {id}, name: {name}, score: {score}`. A missing name renders empty.
pub fn vector_line(m: &VectorMatch) -> String {
    format!(
        "- id: {}, name: {}, score: {}",
        m.id,
        m.meta_text("name").unwrap_or_default(),
        m.score
    )
}

/// `- (source) -[relation]-> (target_id) target_name: target_description`
pub fn graph_line(fact: &GraphFact) -> String {
    format!(
        "- ({}) -[{}]-> ({}) {}: {}",
        fact.source_id, fact.relation, fact.target_id, fact.target_name, fact.target_description
    )
}
