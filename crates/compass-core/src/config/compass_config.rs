//! Top-level Compass configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    defaults, EmbeddingConfig, FusionConfig, GenerationConfig, GraphConfig, ObservabilityConfig,
    VectorConfig,
};
use crate::constants::MAX_GRAPH_TRAVERSAL_DEPTH;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COMPASS_*` and the conventional provider variables)
/// 3. Config file (`--config` path, or `compass.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompassConfig {
    pub embedding: EmbeddingConfig,
    pub vector: VectorConfig,
    pub graph: GraphConfig,
    pub fusion: FusionConfig,
    pub generation: GenerationConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub top_k: Option<usize>,
    pub depth: Option<usize>,
    pub max_concurrency: Option<usize>,
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

impl CompassConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `path` must exist. Without one, `compass.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(defaults::DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();

        if let Some(cli) = cli {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a TOML file. Unknown keys are ignored, missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // One OpenAI key serves both embedding and chat.
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.embedding.api_key = Some(key.clone());
            self.generation.api_key = Some(key);
        }
        if let Some(val) = lookup("COMPASS_EMBEDDING_MODEL") {
            self.embedding.model = val;
        }
        if let Some(v) = lookup("COMPASS_EMBEDDING_DIMENSIONS").and_then(|s| s.parse().ok()) {
            self.embedding.dimensions = v;
        }
        if let Some(v) = lookup("COMPASS_EMBEDDING_CACHE_CAPACITY").and_then(|s| s.parse().ok()) {
            self.embedding.cache_capacity = v;
        }

        if let Some(key) = lookup("PINECONE_API_KEY") {
            self.vector.api_key = Some(key);
        }
        if let Some(val) = lookup("COMPASS_INDEX_NAME") {
            self.vector.index_name = val;
        }
        if let Some(v) = lookup("COMPASS_TOP_K").and_then(|s| s.parse().ok()) {
            self.vector.top_k = v;
        }

        if let Some(val) = lookup("NEO4J_URI") {
            self.graph.uri = val;
        }
        if let Some(val) = lookup("NEO4J_USER") {
            self.graph.user = val;
        }
        if let Some(val) = lookup("NEO4J_PASSWORD") {
            self.graph.password = Some(val);
        }
        if let Some(val) = lookup("COMPASS_GRAPH_DATABASE") {
            self.graph.database = val;
        }
        if let Some(v) = lookup("COMPASS_GRAPH_DEPTH").and_then(|s| s.parse().ok()) {
            self.graph.depth = v;
        }
        if let Some(v) = lookup("COMPASS_GRAPH_MAX_CONCURRENCY").and_then(|s| s.parse().ok()) {
            self.graph.max_concurrency = v;
        }

        if let Some(val) = lookup("COMPASS_CHAT_MODEL") {
            self.generation.model = val;
        }
        if let Some(val) = lookup("COMPASS_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Some(v) = lookup("COMPASS_JSON_LOGS").and_then(|s| s.parse().ok()) {
            self.observability.json_logs = v;
        }
    }

    /// Apply CLI flag overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(top_k) = cli.top_k {
            self.vector.top_k = top_k;
        }
        if let Some(depth) = cli.depth {
            self.graph.depth = depth;
        }
        if let Some(n) = cli.max_concurrency {
            self.graph.max_concurrency = n;
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
        if let Some(json) = cli.json_logs {
            self.observability.json_logs = json;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("embedding.dimensions", self.embedding.dimensions)?;
        positive("embedding.cache_capacity", self.embedding.cache_capacity)?;
        positive("vector.top_k", self.vector.top_k)?;
        positive("graph.max_neighbors_per_node", self.graph.max_neighbors_per_node)?;
        positive("graph.max_concurrency", self.graph.max_concurrency)?;
        positive("graph.max_nodes_per_source", self.graph.max_nodes_per_source)?;
        positive("fusion.max_vector_lines", self.fusion.max_vector_lines)?;
        positive("fusion.max_graph_lines", self.fusion.max_graph_lines)?;
        positive("fusion.max_summary_matches", self.fusion.max_summary_matches)?;

        if self.graph.max_depth == 0 || self.graph.max_depth > MAX_GRAPH_TRAVERSAL_DEPTH {
            return Err(ConfigError::ValidationFailed {
                field: "graph.max_depth".to_string(),
                message: format!("must be between 1 and {MAX_GRAPH_TRAVERSAL_DEPTH}"),
            });
        }
        if self.graph.depth == 0 || self.graph.depth > self.graph.max_depth {
            return Err(ConfigError::ValidationFailed {
                field: "graph.depth".to_string(),
                message: format!("must be between 1 and graph.max_depth ({})", self.graph.max_depth),
            });
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::ValidationFailed {
                field: "generation.temperature".to_string(),
                message: "must be between 0.0 and 2.0".to_string(),
            });
        }
        if self.generation.max_tokens == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "generation.max_tokens".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// API key for the embedding provider.
    pub fn embedding_api_key(&self) -> Result<&str, ConfigError> {
        require(&self.embedding.api_key, "embedding.api_key", "OPENAI_API_KEY")
    }

    /// API key for the chat-completion provider.
    pub fn generation_api_key(&self) -> Result<&str, ConfigError> {
        require(&self.generation.api_key, "generation.api_key", "OPENAI_API_KEY")
    }

    /// API key for the vector index.
    pub fn vector_api_key(&self) -> Result<&str, ConfigError> {
        require(&self.vector.api_key, "vector.api_key", "PINECONE_API_KEY")
    }

    /// Password for the graph store.
    pub fn graph_password(&self) -> Result<&str, ConfigError> {
        require(&self.graph.password, "graph.password", "NEO4J_PASSWORD")
    }
}

fn positive<T: Default + PartialEq>(field: &str, value: T) -> Result<(), ConfigError> {
    if value == T::default() {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be greater than 0".to_string(),
        });
    }
    Ok(())
}

fn require<'a>(
    value: &'a Option<String>,
    field: &str,
    env_var: &str,
) -> Result<&'a str, ConfigError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingCredential {
            field: field.to_string(),
            env_var: env_var.to_string(),
        }),
    }
}
