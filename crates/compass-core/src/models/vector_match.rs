use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dense embedding of a piece of text. Length equals the configured dimension,
/// except for the empty vector which means "no embedding available".
pub type EmbeddingVector = Vec<f32>;

/// Free-form metadata attached to an index entry (name, type, city, description, ...).
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A single nearest-neighbor hit from the vector index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorMatch {
    /// Entry id, unique within the index. Doubles as the graph node id.
    pub id: String,
    /// Similarity score; higher is more similar.
    pub score: f64,
    #[serde(default)]
    pub metadata: Metadata,
}

impl VectorMatch {
    pub fn new(id: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            score,
            metadata: Metadata::new(),
        }
    }

    /// Builder-style metadata insertion.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Metadata field rendered as display text, if present and non-null.
    pub fn meta_text(&self, key: &str) -> Option<String> {
        metadata_text(&self.metadata, key)
    }
}

/// Render a metadata value as plain text. Strings are unquoted, `null` counts as missing.
pub fn metadata_text(metadata: &Metadata, key: &str) -> Option<String> {
    match metadata.get(key)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
