//! Pinecone REST wire types (control plane and data plane).

use compass_core::models::{IndexSpec, Metadata, VectorMatch, VectorQuery};
use serde::{Deserialize, Serialize};

/// API version header value the client is written against.
pub const API_VERSION: &str = "2024-07";

#[derive(Debug, Deserialize)]
pub struct IndexList {
    #[serde(default)]
    pub indexes: Vec<IndexDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexDescription {
    pub name: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub dimension: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CreateIndexRequest<'a> {
    pub name: &'a str,
    pub dimension: usize,
    pub metric: &'a str,
    pub spec: DeploymentSpec<'a>,
}

#[derive(Debug, Serialize)]
pub struct DeploymentSpec<'a> {
    pub serverless: ServerlessSpec<'a>,
}

#[derive(Debug, Serialize)]
pub struct ServerlessSpec<'a> {
    pub cloud: &'a str,
    pub region: &'a str,
}

impl<'a> From<&'a IndexSpec> for CreateIndexRequest<'a> {
    fn from(spec: &'a IndexSpec) -> Self {
        Self {
            name: &spec.name,
            dimension: spec.dimension,
            metric: &spec.metric,
            spec: DeploymentSpec {
                serverless: ServerlessSpec {
                    cloud: &spec.cloud,
                    region: &spec.region,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest<'a> {
    pub vector: &'a [f32],
    pub top_k: usize,
    pub include_metadata: bool,
    pub include_values: bool,
}

impl<'a> From<&'a VectorQuery> for QueryRequest<'a> {
    fn from(q: &'a VectorQuery) -> Self {
        Self {
            vector: &q.vector,
            top_k: q.top_k,
            include_metadata: q.include_metadata,
            include_values: q.include_values,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub matches: Vec<WireMatch>,
}

#[derive(Debug, Deserialize)]
pub struct WireMatch {
    pub id: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl From<WireMatch> for VectorMatch {
    fn from(m: WireMatch) -> Self {
        VectorMatch {
            id: m.id,
            score: m.score,
            metadata: m.metadata.unwrap_or_default(),
        }
    }
}
