pub mod chat;
pub mod fused_context;
pub mod graph_fact;
pub mod index;
pub mod vector_match;

pub use chat::{ChatMessage, ChatRequest, ChatRole, Prompt};
pub use fused_context::FusedContext;
pub use graph_fact::{GraphFact, NeighborRecord};
pub use index::{IndexSpec, IndexStatus, VectorQuery};
pub use vector_match::{metadata_text, EmbeddingVector, Metadata, VectorMatch};
