//! # compass-retrieval
//!
//! Stage one of the pipeline: embed the query (through the cache) and ask the
//! vector index for its top-K nearest entries.

pub mod pinecone;
pub mod retriever;

pub use pinecone::PineconeIndex;
pub use retriever::VectorRetriever;
