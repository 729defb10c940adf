//! # compass-core
//!
//! Foundation crate for the Compass hybrid retrieval assistant.
//! Defines the evidence models, provider traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CompassConfig;
pub use errors::{CompassError, CompassResult};
pub use models::{
    ChatMessage, ChatRole, EmbeddingVector, FusedContext, GraphFact, Metadata, Prompt,
    VectorMatch,
};
