use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{MovieOverview, OverviewSource};

/// In-memory source keyed by exact query. Unknown queries return the default list.
#[derive(Debug, Clone, Default)]
pub struct MockOverviewSource {
    inner: Arc<MockInner>,
}

#[derive(Debug, Default)]
struct MockInner {
    by_query: Mutex<HashMap<String, Vec<MovieOverview>>>,
    default: Mutex<Vec<MovieOverview>>,
    queries: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockOverviewSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(self, query: impl Into<String>, results: Vec<MovieOverview>) -> Self {
        self.inner.by_query.lock().insert(query.into(), results);
        self
    }

    pub fn with_default(self, results: Vec<MovieOverview>) -> Self {
        *self.inner.default.lock() = results;
        self
    }

    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.inner.queries.lock().clone()
    }
}

impl OverviewSource for MockOverviewSource {
    async fn search_overviews(&self, query: &str) -> Vec<MovieOverview> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.queries.lock().push(query.to_string());

        self.inner
            .by_query
            .lock()
            .get(query)
            .cloned()
            .unwrap_or_else(|| self.inner.default.lock().clone())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
