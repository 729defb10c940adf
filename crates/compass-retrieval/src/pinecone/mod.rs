//! Pinecone-backed vector index over the REST API.
//!
//! Control plane (list/describe/create) goes to `control_url`; queries go to
//! the index's own data-plane host, resolved once and reused.

pub mod protocol;

use std::sync::OnceLock;
use std::time::Duration;

use compass_core::config::VectorConfig;
use compass_core::errors::{CompassResult, ConfigError, RetrievalError};
use compass_core::models::{IndexSpec, IndexStatus, VectorMatch, VectorQuery};
use compass_core::traits::IVectorIndex;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode};
use tracing::debug;

use protocol::{CreateIndexRequest, IndexDescription, IndexList, QueryRequest, QueryResponse};

pub struct PineconeIndex {
    client: Client,
    api_key: String,
    control_url: String,
    index_name: String,
    host: OnceLock<String>,
}

impl PineconeIndex {
    pub fn new(config: &VectorConfig, api_key: impl Into<String>) -> CompassResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "vector.control_url".to_string(),
                message: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            control_url: config.control_url.trim_end_matches('/').to_string(),
            index_name: config.index_name.clone(),
            host: OnceLock::new(),
        })
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", protocol::API_VERSION)
    }

    fn index_error(&self, name: &str, reason: impl Into<String>) -> RetrievalError {
        RetrievalError::IndexOperationFailed {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    fn describe(&self, name: &str) -> CompassResult<Option<IndexDescription>> {
        let url = format!("{}/indexes/{}", self.control_url, name);
        let response = self
            .request(Method::GET, &url)
            .send()
            .map_err(|e| self.index_error(name, format!("HTTP error: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response).map_err(|r| self.index_error(name, r))?;
        let description = response
            .json()
            .map_err(|e| self.index_error(name, format!("JSON parse error: {e}")))?;
        Ok(Some(description))
    }

    /// Data-plane base URL for the configured index.
    fn host(&self) -> CompassResult<String> {
        if let Some(host) = self.host.get() {
            return Ok(host.clone());
        }
        let description = self
            .describe(&self.index_name)?
            .ok_or_else(|| RetrievalError::IndexNotFound {
                name: self.index_name.clone(),
            })?;
        let host = data_plane_url(&description.host);
        debug!(index = %self.index_name, host = %host, "resolved index host");
        Ok(self.host.get_or_init(|| host).clone())
    }
}

impl IVectorIndex for PineconeIndex {
    fn ensure_index(&self, spec: &IndexSpec) -> CompassResult<IndexStatus> {
        if self.list_indexes()?.iter().any(|n| n == &spec.name) {
            return Ok(IndexStatus::AlreadyExists);
        }

        let url = format!("{}/indexes", self.control_url);
        let response = self
            .request(Method::POST, &url)
            .json(&CreateIndexRequest::from(spec))
            .send()
            .map_err(|e| self.index_error(&spec.name, format!("HTTP error: {e}")))?;

        // Another client may have created it between list and create.
        if response.status() == StatusCode::CONFLICT {
            return Ok(IndexStatus::AlreadyExists);
        }
        check_status(response).map_err(|r| self.index_error(&spec.name, r))?;
        Ok(IndexStatus::Created)
    }

    fn list_indexes(&self) -> CompassResult<Vec<String>> {
        let url = format!("{}/indexes", self.control_url);
        let response = self
            .request(Method::GET, &url)
            .send()
            .map_err(|e| self.index_error("*", format!("HTTP error: {e}")))?;
        let response = check_status(response).map_err(|r| self.index_error("*", r))?;
        let list: IndexList = response
            .json()
            .map_err(|e| self.index_error("*", format!("JSON parse error: {e}")))?;
        Ok(list.indexes.into_iter().map(|i| i.name).collect())
    }

    fn query(&self, query: &VectorQuery) -> CompassResult<Vec<VectorMatch>> {
        let url = format!("{}/query", self.host()?);
        let response = self
            .request(Method::POST, &url)
            .json(&QueryRequest::from(query))
            .send()
            .map_err(|e| RetrievalError::QueryFailed {
                reason: format!("HTTP error: {e}"),
            })?;
        let response =
            check_status(response).map_err(|reason| RetrievalError::QueryFailed { reason })?;
        let parsed: QueryResponse = response.json().map_err(|e| RetrievalError::QueryFailed {
            reason: format!("JSON parse error: {e}"),
        })?;

        debug!(index = %self.index_name, matches = parsed.matches.len(), "index query complete");
        Ok(parsed.matches.into_iter().map(VectorMatch::from).collect())
    }
}

/// Pass successful responses through; turn anything else into a reason string.
fn check_status(response: Response) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(format!("API returned {status}: {body}"))
}

/// Index hosts come back bare (`name-xyz.svc.region.pinecone.io`).
fn data_plane_url(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}
