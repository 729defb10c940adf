//! Error handling for Compass.
//! One error enum per subsystem, `thiserror` only; `anyhow` stays in the binary.

pub mod compass_error;
pub mod config_error;
pub mod embedding_error;
pub mod generation_error;
pub mod graph_error;
pub mod retrieval_error;

pub use compass_error::{CompassError, CompassResult};
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use generation_error::GenerationError;
pub use graph_error::GraphError;
pub use retrieval_error::RetrievalError;
