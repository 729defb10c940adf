use serde::{Deserialize, Serialize};

/// Bounded, rendered evidence for one query. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FusedContext {
    query: String,
    match_summary: String,
    vector_lines: Vec<String>,
    graph_lines: Vec<String>,
}

impl FusedContext {
    pub fn new(
        query: impl Into<String>,
        match_summary: impl Into<String>,
        vector_lines: Vec<String>,
        graph_lines: Vec<String>,
    ) -> Self {
        Self {
            query: query.into(),
            match_summary: match_summary.into(),
            vector_lines,
            graph_lines,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn match_summary(&self) -> &str {
        &self.match_summary
    }

    pub fn vector_lines(&self) -> &[String] {
        &self.vector_lines
    }

    pub fn graph_lines(&self) -> &[String] {
        &self.graph_lines
    }

    /// Whether the context carries no evidence at all.
    pub fn is_empty(&self) -> bool {
        self.vector_lines.is_empty() && self.graph_lines.is_empty()
    }
}
