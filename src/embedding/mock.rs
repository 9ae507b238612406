//! In-memory embedder for tests (enabled by `cfg(test)` or the `mock` feature).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::error::EmbeddingError;
use super::provider::Embedder;

/// Returns preset vectors per exact text and counts every call.
///
/// Unknown texts map to the fallback vector (all zeros unless overridden), which scores 0.0
/// against everything.
#[derive(Debug)]
pub struct MockEmbedder {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
    failing: Option<String>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: HashMap::new(),
            fallback: vec![0.0; dim],
            failing: None,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Maps `text` to `vector` (the vector must have `dim` entries).
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dim, "mock vector has wrong dimension");
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Vector returned for texts without an explicit mapping.
    pub fn with_fallback(mut self, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dim, "mock vector has wrong dimension");
        self.fallback = vector;
        self
    }

    /// Makes `embed(text)` return an inference error.
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.failing = Some(text.into());
        self
    }

    /// Number of `embed` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Texts passed to `embed`, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().clone()
    }
}

impl Embedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().push(text.to_string());

        if self.failing.as_deref() == Some(text) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("mock failure for {text:?}"),
            });
        }

        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }
}
