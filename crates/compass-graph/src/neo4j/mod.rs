//! Neo4j graph store over the HTTP transactional API.
//!
//! Every statement is its own auto-commit request (`POST /db/{db}/tx/commit`).
//! The server rolls back an explicit transaction on the first failing
//! statement, so sharing one across a batch would fail every later lookup.
//! A session is only the per-batch scope: it holds the lookup count and
//! owns no server-side state.

pub mod protocol;

use std::time::Duration;

use compass_core::config::GraphConfig;
use compass_core::constants::GRAPH_PING_STATEMENT;
use compass_core::errors::{CompassResult, ConfigError, GraphError};
use compass_core::models::NeighborRecord;
use compass_core::traits::{GraphSession, IGraphStore};
use reqwest::blocking::{Client, Response};
use serde_json::json;
use tracing::debug;

use protocol::{TxRequest, TxResponse};

pub struct Neo4jHttpStore {
    client: Client,
    base_url: String,
    database: String,
    user: String,
    password: String,
    neighborhood_statement: String,
}

impl Neo4jHttpStore {
    pub fn new(config: &GraphConfig, password: impl Into<String>) -> CompassResult<Self> {
        if !is_valid_label(&config.node_label) {
            return Err(ConfigError::ValidationFailed {
                field: "graph.node_label".to_string(),
                message: format!("'{}' is not a plain identifier", config.node_label),
            }
            .into());
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "graph.uri".to_string(),
                message: format!("HTTP client setup failed: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.uri.trim_end_matches('/').to_string(),
            database: config.database.clone(),
            user: config.user.clone(),
            password: password.into(),
            neighborhood_statement: neighborhood_statement(&config.node_label),
        })
    }

    fn commit_endpoint(&self) -> String {
        format!("{}/db/{}/tx/commit", self.base_url, self.database)
    }

    /// Run one statement in its own auto-commit transaction.
    fn run(&self, body: &TxRequest<'_>) -> Result<TxResponse, String> {
        self.client
            .post(self.commit_endpoint())
            .basic_auth(&self.user, Some(&self.password))
            .json(body)
            .send()
            .map_err(|e| format!("HTTP error: {e}"))
            .and_then(parse)
    }
}

impl IGraphStore for Neo4jHttpStore {
    fn open_session(&self) -> CompassResult<Box<dyn GraphSession + '_>> {
        debug!(database = %self.database, "graph session opened");
        Ok(Box::new(Neo4jSession {
            store: self,
            lookups: 0,
        }))
    }

    fn ping(&self) -> CompassResult<String> {
        let request = TxRequest::single(GRAPH_PING_STATEMENT, json!({}));
        let fail = |reason: String| GraphError::StatementFailed { reason };

        let body = self.run(&request).map_err(fail)?;
        body.results
            .first()
            .and_then(|r| r.first_text())
            .ok_or_else(|| fail("ping returned no rows".to_string()).into())
    }
}

struct Neo4jSession<'a> {
    store: &'a Neo4jHttpStore,
    lookups: usize,
}

impl GraphSession for Neo4jSession<'_> {
    fn neighbors(&mut self, node_id: &str, limit: usize) -> CompassResult<Vec<NeighborRecord>> {
        let request = TxRequest::single(
            &self.store.neighborhood_statement,
            json!({ "nid": node_id, "limit": limit }),
        );
        self.lookups += 1;
        let body = self
            .store
            .run(&request)
            .map_err(|reason| GraphError::QueryFailed {
                node_id: node_id.to_string(),
                reason,
            })?;

        Ok(body
            .results
            .first()
            .map(|r| r.neighbor_records())
            .unwrap_or_default())
    }
}

impl Drop for Neo4jSession<'_> {
    fn drop(&mut self) {
        debug!(lookups = self.lookups, "graph session released");
    }
}

/// Decode a transactional response, treating body-level errors as failures.
fn parse(response: Response) -> Result<TxResponse, String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(format!("API returned {status}: {body}"));
    }
    let body: TxResponse = response
        .json()
        .map_err(|e| format!("JSON parse error: {e}"))?;
    match body.error_reason() {
        Some(reason) => Err(reason),
        None => Ok(body),
    }
}

/// Labels are spliced into the statement text, so only identifiers pass.
fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn neighborhood_statement(label: &str) -> String {
    format!(
        "MATCH (n:{label} {{id: $nid}})-[r]-(m:{label}) \
         RETURN type(r) AS rel, labels(m) AS labels, m.id AS id, \
         m.name AS name, m.type AS type, m.description AS description \
         LIMIT $limit"
    )
}
