//! HybridPipeline: one query in, one turn outcome out.
//!
//! No external failure escapes `run`. Embedding and retrieval failures end the
//! turn as `NoMatches`; graph failures shrink the evidence; a generation
//! failure becomes the answer text.

use std::sync::Arc;

use compass_core::config::CompassConfig;
use compass_core::errors::{CompassError, CompassResult, RetrievalError};
use compass_core::models::{FusedContext, IndexSpec, IndexStatus, VectorMatch};
use compass_embeddings::{CacheStats, EmbeddingCache};
use compass_fusion::ContextFuser;
use compass_generation::generator::failure_answer;
use compass_generation::AnswerGenerator;
use compass_graph::{GraphExpander, NodeFailure};
use compass_retrieval::VectorRetriever;
use serde::Serialize;
use tracing::{info, warn};

use crate::context::ProviderContext;

/// Why a turn produced no evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchReason {
    EmbeddingUnavailable,
    RetrievalFailed,
    Empty,
}

#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub matches: Vec<VectorMatch>,
    pub context: FusedContext,
    pub graph_failures: Vec<NodeFailure>,
    pub fact_count: usize,
    pub generation_failed: bool,
}

#[derive(Debug, Clone)]
pub enum TurnOutcome {
    NoMatches { reason: NoMatchReason },
    Answered(Answer),
}

pub struct HybridPipeline {
    cache: Arc<EmbeddingCache>,
    retriever: VectorRetriever,
    expander: GraphExpander,
    fuser: ContextFuser,
    generator: AnswerGenerator,
    index_spec: IndexSpec,
    top_k: usize,
    depth: usize,
    model: String,
}

impl HybridPipeline {
    pub fn new(providers: ProviderContext, config: &CompassConfig) -> CompassResult<Self> {
        let cache = Arc::new(EmbeddingCache::new(providers.embedder, &config.embedding));
        let retriever = VectorRetriever::new(cache.clone(), providers.index);
        let expander = GraphExpander::new(providers.graph, &config.graph)?;

        Ok(Self {
            cache,
            retriever,
            expander,
            fuser: ContextFuser::new(config.fusion.clone()),
            generator: AnswerGenerator::new(providers.chat, &config.generation),
            index_spec: config.vector.index_spec(config.embedding.dimensions),
            top_k: config.vector.top_k,
            depth: config.graph.depth,
            model: config.generation.model.clone(),
        })
    }

    /// Create the configured vector index when it is missing.
    pub fn ensure_index(&self) -> CompassResult<IndexStatus> {
        self.retriever.ensure_index(&self.index_spec)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Whether `query` would be answered from the embedding cache.
    pub fn is_cached(&self, query: &str) -> bool {
        self.cache.contains(query)
    }

    pub fn run(&self, query: &str) -> TurnOutcome {
        let matches = match crate::retrieval_span!(self.top_k)
            .in_scope(|| self.retriever.search(query, self.top_k))
        {
            Ok(matches) if matches.is_empty() => {
                return TurnOutcome::NoMatches {
                    reason: NoMatchReason::Empty,
                }
            }
            Ok(matches) => matches,
            Err(e @ CompassError::RetrievalError(RetrievalError::EmbeddingUnavailable { .. })) => {
                warn!(error = %e, "no embedding available, skipping retrieval");
                return TurnOutcome::NoMatches {
                    reason: NoMatchReason::EmbeddingUnavailable,
                };
            }
            Err(e) => {
                warn!(error = %e, "vector retrieval failed");
                return TurnOutcome::NoMatches {
                    reason: NoMatchReason::RetrievalFailed,
                };
            }
        };

        let node_ids: Vec<String> = matches.iter().map(|m| m.id.clone()).collect();
        let expansion = crate::expansion_span!(node_ids.len(), self.depth)
            .in_scope(|| self.expander.expand_detailed(&node_ids, self.depth));

        let context = self.fuser.fuse(query, &matches, &expansion.facts);
        let prompt = self.fuser.render_prompt(&context);

        let (text, generation_failed) = crate::generation_span!(self.model).in_scope(|| {
            match self.generator.try_generate(&prompt) {
                Ok(text) => (text, false),
                Err(e) => {
                    warn!(error = %e, "answer generation failed");
                    (failure_answer(&e), true)
                }
            }
        });

        info!(
            matches = matches.len(),
            facts = expansion.facts.len(),
            graph_failures = expansion.failures.len(),
            generation_failed,
            "turn complete"
        );

        TurnOutcome::Answered(Answer {
            text,
            fact_count: expansion.facts.len(),
            matches,
            context,
            graph_failures: expansion.failures,
            generation_failed,
        })
    }
}
