//! Per-turn query log: id, query text, outcome, latency, evidence counts, cache hit.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pipeline::{NoMatchReason, TurnOutcome};

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnStatus {
    Answered,
    GenerationFailed,
    NoMatches(NoMatchReason),
}

impl From<&TurnOutcome> for TurnStatus {
    fn from(outcome: &TurnOutcome) -> Self {
        match outcome {
            TurnOutcome::NoMatches { reason } => TurnStatus::NoMatches(*reason),
            TurnOutcome::Answered(answer) if answer.generation_failed => TurnStatus::GenerationFailed,
            TurnOutcome::Answered(_) => TurnStatus::Answered,
        }
    }
}

/// A single query log entry.
#[derive(Debug, Clone, Serialize)]
pub struct QueryLogEntry {
    pub query_id: Uuid,
    pub query: String,
    pub status: TurnStatus,
    pub latency: Duration,
    pub match_count: usize,
    pub fact_count: usize,
    pub graph_failures: usize,
    pub cache_hit: bool,
    pub timestamp: DateTime<Utc>,
}

impl QueryLogEntry {
    /// Summarize a finished turn, timestamped now.
    pub fn from_outcome(
        query_id: Uuid,
        query: impl Into<String>,
        outcome: &TurnOutcome,
        latency: Duration,
        cache_hit: bool,
    ) -> Self {
        let (match_count, fact_count, graph_failures) = match outcome {
            TurnOutcome::NoMatches { .. } => (0, 0, 0),
            TurnOutcome::Answered(a) => (a.matches.len(), a.fact_count, a.graph_failures.len()),
        };
        Self {
            query_id,
            query: query.into(),
            status: TurnStatus::from(outcome),
            latency,
            match_count,
            fact_count,
            graph_failures,
            cache_hit,
            timestamp: Utc::now(),
        }
    }

    /// Whether any external call degraded during this turn.
    pub fn degraded(&self) -> bool {
        self.graph_failures > 0
            || matches!(
                self.status,
                TurnStatus::GenerationFailed
                    | TurnStatus::NoMatches(NoMatchReason::EmbeddingUnavailable)
                    | TurnStatus::NoMatches(NoMatchReason::RetrievalFailed)
            )
    }
}

/// Bounded in-memory log of recent turns. Oldest entries drop first.
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: VecDeque<QueryLogEntry>,
    max_entries: usize,
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::with_capacity(1000)
    }
}

impl QueryLog {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            event = "query_logged",
            query_id = %entry.query_id,
            status = ?entry.status,
            latency_ms = entry.latency.as_millis() as u64,
            matches = entry.match_count,
            facts = entry.fact_count,
            graph_failures = entry.graph_failures,
            cache_hit = entry.cache_hit,
            "query logged"
        );

        self.entries.push_back(entry);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &QueryLogEntry> {
        self.entries.iter()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0-1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let idx = ((p.clamp(0.0, 1.0) * (latencies.len() - 1) as f64).round() as usize)
            .min(latencies.len() - 1);
        latencies[idx]
    }

    /// Turns in which some external call degraded.
    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| e.degraded()).count()
    }
}
