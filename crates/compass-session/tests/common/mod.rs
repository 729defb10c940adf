//! Pipeline assembled from in-memory fakes, with handles kept for inspection.

#![allow(dead_code)]

use std::sync::Arc;

use compass_core::config::CompassConfig;
use compass_core::models::VectorMatch;
use compass_session::{HybridPipeline, ProviderContext};
use test_fixtures::fakes::{InMemoryGraphStore, ScriptedChat, StaticEmbedder, StaticVectorIndex};
use test_fixtures::load_scenario;

pub const DIMS: usize = 8;

pub struct Harness {
    pub embedder: Arc<StaticEmbedder>,
    pub index: Arc<StaticVectorIndex>,
    pub graph: Arc<InMemoryGraphStore>,
    pub chat: Arc<ScriptedChat>,
    pub config: CompassConfig,
}

impl Harness {
    pub fn new(
        embedder: StaticEmbedder,
        index: StaticVectorIndex,
        graph: InMemoryGraphStore,
        chat: ScriptedChat,
    ) -> Self {
        let mut config = CompassConfig::default();
        config.embedding.dimensions = DIMS;
        Self {
            embedder: Arc::new(embedder),
            index: Arc::new(index),
            graph: Arc::new(graph),
            chat: Arc::new(chat),
            config,
        }
    }

    /// Index, graph, and chat reply for a golden scenario.
    pub fn scenario(name: &str) -> (Self, String) {
        let scenario = load_scenario(name);
        let harness = Self::new(
            StaticEmbedder::new(DIMS),
            StaticVectorIndex::new(scenario.matches.clone()),
            InMemoryGraphStore::from_fixture(&scenario.graph),
            ScriptedChat::replying("Visit at dawn, then walk the lakeshore."),
        );
        (harness, scenario.query)
    }

    pub fn with_matches(matches: Vec<VectorMatch>, graph: InMemoryGraphStore) -> Self {
        Self::new(
            StaticEmbedder::new(DIMS),
            StaticVectorIndex::new(matches),
            graph,
            ScriptedChat::replying("ok"),
        )
    }

    pub fn providers(&self) -> ProviderContext {
        ProviderContext::new(
            self.embedder.clone(),
            self.index.clone(),
            self.graph.clone(),
            self.chat.clone(),
        )
    }

    pub fn pipeline(&self) -> HybridPipeline {
        HybridPipeline::new(self.providers(), &self.config).unwrap()
    }
}
