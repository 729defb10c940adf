pub mod chat;
pub mod embedding;
pub mod graph_store;
pub mod vector_index;

pub use chat::IChatProvider;
pub use embedding::IEmbeddingProvider;
pub use graph_store::{GraphSession, IGraphStore};
pub use vector_index::IVectorIndex;
