//! Configuration system for Compass.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod compass_config;
pub mod defaults;
pub mod embedding_config;
pub mod fusion_config;
pub mod generation_config;
pub mod graph_config;
pub mod observability_config;
pub mod vector_config;

pub use compass_config::{CliOverrides, CompassConfig};
pub use embedding_config::EmbeddingConfig;
pub use fusion_config::FusionConfig;
pub use generation_config::GenerationConfig;
pub use graph_config::GraphConfig;
pub use observability_config::ObservabilityConfig;
pub use vector_config::VectorConfig;
