//! Wire types for the Neo4j HTTP transactional endpoint.

use std::collections::HashMap;

use compass_core::models::NeighborRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct TxRequest<'a> {
    pub statements: Vec<Statement<'a>>,
}

impl<'a> TxRequest<'a> {
    pub fn single(statement: &'a str, parameters: Value) -> Self {
        Self {
            statements: vec![Statement {
                statement,
                parameters,
                result_data_contents: ["row"],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Statement<'a> {
    pub statement: &'a str,
    pub parameters: Value,
    #[serde(rename = "resultDataContents")]
    pub result_data_contents: [&'static str; 1],
}

#[derive(Debug, Deserialize)]
pub struct TxResponse {
    #[serde(default)]
    pub results: Vec<StatementResult>,
    #[serde(default)]
    pub errors: Vec<TxError>,
}

impl TxResponse {
    /// Errors reported in the body, joined into one reason.
    pub fn error_reason(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|e| format!("{}: {}", e.code, e.message))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StatementResult {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Row>,
}

#[derive(Debug, Deserialize)]
pub struct Row {
    pub row: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct TxError {
    pub code: String,
    pub message: String,
}

impl StatementResult {
    /// Neighbor rows keyed by the column aliases of the neighborhood statement.
    pub fn neighbor_records(&self) -> Vec<NeighborRecord> {
        let positions: HashMap<&str, usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();
        let cell = |row: &Row, column: &str| -> Option<Value> {
            positions.get(column).and_then(|&i| row.row.get(i)).cloned()
        };

        self.data
            .iter()
            .map(|row| NeighborRecord {
                relation: cell(row, "rel").and_then(text).unwrap_or_default(),
                labels: match cell(row, "labels") {
                    Some(Value::Array(items)) => items.into_iter().filter_map(text).collect(),
                    _ => Vec::new(),
                },
                id: cell(row, "id").and_then(text),
                name: cell(row, "name").and_then(text),
                node_type: cell(row, "type").and_then(text),
                description: cell(row, "description").and_then(text),
            })
            .collect()
    }

    /// First cell of the first row, as text.
    pub fn first_text(&self) -> Option<String> {
        self.data
            .first()
            .and_then(|r| r.row.first())
            .cloned()
            .and_then(text)
    }
}

/// Strings pass through, null is absent, other scalars use their JSON form.
fn text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
