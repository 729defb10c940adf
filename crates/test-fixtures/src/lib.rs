//! Test support for the Compass workspace.
//!
//! `fakes` holds in-memory stand-ins for the four external providers;
//! the loader functions below read JSON scenarios from `golden/`.

pub mod fakes;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use compass_core::models::VectorMatch;

/// Root directory of the test-fixtures crate, wherever the caller lives.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join("golden").join(relative_path)
}

/// Node of a fixture graph.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeFixture {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub node_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

fn default_labels() -> Vec<String> {
    vec!["Entity".to_string()]
}

/// Directed, typed edge of a fixture graph.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeFixture {
    pub source: String,
    pub relation: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphFixture {
    #[serde(default)]
    pub nodes: Vec<NodeFixture>,
    #[serde(default)]
    pub edges: Vec<EdgeFixture>,
}

/// Expected fused output for a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpectation {
    pub match_summary: String,
    pub graph_line_count: usize,
    #[serde(default)]
    pub graph_lines_contain: Vec<String>,
    #[serde(default)]
    pub vector_lines: Vec<String>,
}

/// An end-to-end query scenario: index contents, graph, and expected evidence.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub query: String,
    pub matches: Vec<VectorMatch>,
    pub graph: GraphFixture,
    pub expected: ScenarioExpectation,
}

/// Load a scenario from `golden/scenarios/<name>.json`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}
