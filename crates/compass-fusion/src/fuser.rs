//! ContextFuser: bounded evidence views plus prompt assembly.

use std::collections::HashSet;

use compass_core::config::FusionConfig;
use compass_core::models::{FusedContext, GraphFact, Prompt, VectorMatch};

use crate::render;

/// Evidence budgets are fixed at construction; `fuse` takes no per-call limits.
#[derive(Debug, Clone)]
pub struct ContextFuser {
    config: FusionConfig,
}

impl Default for ContextFuser {
    fn default() -> Self {
        Self::new(FusionConfig::default())
    }
}

impl ContextFuser {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Build the bounded evidence set for `query`.
    ///
    /// Matches are taken in the order given (normally score-descending),
    /// facts likewise.
    pub fn fuse(&self, query: &str, matches: &[VectorMatch], facts: &[GraphFact]) -> FusedContext {
        let match_summary = matches
            .iter()
            .take(self.config.max_summary_matches)
            .map(render::summary_entry)
            .collect::<Vec<_>>()
            .join(", ");

        let vector_lines = matches
            .iter()
            .take(self.config.max_vector_lines)
            .map(render::vector_line)
            .collect();

        let graph_lines = if self.config.dedupe_facts {
            let mut seen = HashSet::new();
            facts
                .iter()
                .filter(|f| seen.insert((f.source_id.clone(), f.relation.clone(), f.target_id.clone())))
                .take(self.config.max_graph_lines)
                .map(render::graph_line)
                .collect()
        } else {
            facts
                .iter()
                .take(self.config.max_graph_lines)
                .map(render::graph_line)
                .collect()
        };

        FusedContext::new(query, match_summary, vector_lines, graph_lines)
    }

    /// System instruction plus the user message carrying all evidence.
    pub fn render_prompt(&self, context: &FusedContext) -> Prompt {
        let user = format!(
            "User query: {}\n\n\
             Summary of top matches: {}\n\n\
             Details of semantic matches:\n{}\n\n\
             Graph facts (neighboring relations):\n{}\n\n\
             Based on the above, answer the user's question.",
            context.query(),
            context.match_summary(),
            context.vector_lines().join("\n"),
            context.graph_lines().join("\n"),
        );
        Prompt::new(self.config.system_instruction.clone(), user)
    }
}
