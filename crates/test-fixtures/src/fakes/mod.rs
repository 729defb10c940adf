//! In-memory provider fakes with call accounting and scripted failures.

pub mod chat;
pub mod embedder;
pub mod graph_store;
pub mod vector_index;

pub use chat::ScriptedChat;
pub use embedder::StaticEmbedder;
pub use graph_store::InMemoryGraphStore;
pub use vector_index::StaticVectorIndex;
