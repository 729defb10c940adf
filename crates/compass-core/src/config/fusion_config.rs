use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence budgets for prompt assembly. Fixed per fuser instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Matches rendered into the one-line summary.
    pub max_summary_matches: usize,
    /// Matches rendered as detail lines.
    pub max_vector_lines: usize,
    /// Graph facts rendered as detail lines.
    pub max_graph_lines: usize,
    /// Drop repeated (source, relation, target) facts before capping.
    pub dedupe_facts: bool,
    pub system_instruction: String,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            max_summary_matches: defaults::DEFAULT_MAX_SUMMARY_MATCHES,
            max_vector_lines: defaults::DEFAULT_MAX_VECTOR_LINES,
            max_graph_lines: defaults::DEFAULT_MAX_GRAPH_LINES,
            dedupe_facts: defaults::DEFAULT_DEDUPE_FACTS,
            system_instruction: defaults::DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }
}
