use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use compass_core::errors::{CompassResult, RetrievalError};
use compass_core::models::{IndexSpec, IndexStatus, VectorMatch, VectorQuery};
use compass_core::traits::IVectorIndex;

/// Vector index that answers every query with a fixed match list.
pub struct StaticVectorIndex {
    matches: Vec<VectorMatch>,
    fail: AtomicBool,
    indexes: Mutex<Vec<String>>,
    queries: Mutex<Vec<VectorQuery>>,
}

impl StaticVectorIndex {
    /// `matches` are returned in the given order, truncated to `top_k`.
    pub fn new(matches: Vec<VectorMatch>) -> Self {
        Self {
            matches,
            fail: AtomicBool::new(false),
            indexes: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Make every query fail.
    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn last_query(&self) -> Option<VectorQuery> {
        self.queries.lock().unwrap().last().cloned()
    }
}

impl IVectorIndex for StaticVectorIndex {
    fn ensure_index(&self, spec: &IndexSpec) -> CompassResult<IndexStatus> {
        let mut indexes = self.indexes.lock().unwrap();
        if indexes.iter().any(|n| n == &spec.name) {
            return Ok(IndexStatus::AlreadyExists);
        }
        indexes.push(spec.name.clone());
        Ok(IndexStatus::Created)
    }

    fn list_indexes(&self) -> CompassResult<Vec<String>> {
        Ok(self.indexes.lock().unwrap().clone())
    }

    fn query(&self, query: &VectorQuery) -> CompassResult<Vec<VectorMatch>> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(RetrievalError::QueryFailed {
                reason: "scripted index failure".to_string(),
            }
            .into());
        }
        Ok(self.matches.iter().take(query.top_k).cloned().collect())
    }
}
