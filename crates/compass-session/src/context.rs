use std::sync::Arc;

use compass_core::traits::{IChatProvider, IEmbeddingProvider, IGraphStore, IVectorIndex};

/// The four external collaborators, injected into `HybridPipeline::new`.
#[derive(Clone)]
pub struct ProviderContext {
    pub embedder: Arc<dyn IEmbeddingProvider>,
    pub index: Arc<dyn IVectorIndex>,
    pub graph: Arc<dyn IGraphStore>,
    pub chat: Arc<dyn IChatProvider>,
}

impl ProviderContext {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        index: Arc<dyn IVectorIndex>,
        graph: Arc<dyn IGraphStore>,
        chat: Arc<dyn IChatProvider>,
    ) -> Self {
        Self {
            embedder,
            index,
            graph,
            chat,
        }
    }
}
