use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use compass_core::errors::{CompassResult, EmbeddingError};
use compass_core::traits::IEmbeddingProvider;

/// Deterministic embedder: the same text always maps to the same vector.
pub struct StaticEmbedder {
    dims: usize,
    failing: HashSet<String>,
    always_fail: bool,
    calls: AtomicUsize,
}

impl StaticEmbedder {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            failing: HashSet::new(),
            always_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail for this exact text.
    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }

    /// Fail for every text.
    pub fn always_failing(mut self) -> Self {
        self.always_fail = true;
        self
    }

    /// Number of provider calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for StaticEmbedder {
    fn embed(&self, text: &str) -> CompassResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.always_fail || self.failing.contains(text) {
            return Err(EmbeddingError::ProviderFailed {
                provider: "static".to_string(),
                reason: format!("scripted failure for {text:?}"),
            }
            .into());
        }

        let seed = text
            .bytes()
            .fold(17u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
        Ok((0..self.dims)
            .map(|i| ((seed.wrapping_add(i as u32 * 7919) % 1000) as f32) / 1000.0)
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "static"
    }
}
