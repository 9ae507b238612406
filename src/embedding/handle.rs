//! Process-wide, load-once embedder handle.
//!
//! The model is loaded at most once per handle. An eager handle owns an already-loaded
//! embedder; a lazy handle defers loading to first use and serializes concurrent first
//! callers behind an init lock so the loader never runs twice. Once loaded, reads are
//! lock-free and inference is shared by reference.

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::{error, info};

use super::error::EmbeddingError;
use super::minilm::{MiniLmConfig, MiniLmEmbedder};
use super::provider::Embedder;

type Loader = Box<dyn Fn() -> Result<Arc<dyn Embedder>, EmbeddingError> + Send + Sync>;

/// Cloneable handle injected into the scorer and policies.
#[derive(Clone)]
pub struct EmbedderHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    cell: OnceLock<Arc<dyn Embedder>>,
    init_lock: Mutex<()>,
    loader: Option<Loader>,
}

impl fmt::Debug for EmbedderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbedderHandle")
            .field("initialized", &self.is_initialized())
            .field("lazy", &self.inner.loader.is_some())
            .finish()
    }
}

impl EmbedderHandle {
    /// Wraps an embedder that is already loaded.
    pub fn new<E: Embedder + 'static>(embedder: E) -> Self {
        Self::from_arc(Arc::new(embedder))
    }

    /// Wraps a shared embedder that is already loaded.
    pub fn from_arc(embedder: Arc<dyn Embedder>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(embedder);
        Self {
            inner: Arc::new(HandleInner {
                cell,
                init_lock: Mutex::new(()),
                loader: None,
            }),
        }
    }

    /// Loads a MiniLM embedder now; any failure is returned to the caller as fatal.
    pub fn load_eager(config: MiniLmConfig) -> Result<Self, EmbeddingError> {
        let embedder = MiniLmEmbedder::load(config)?;
        Ok(Self::new(embedder))
    }

    /// Defers loading to the first [`get`](Self::get).
    pub fn lazy<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn Embedder>, EmbeddingError> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(HandleInner {
                cell: OnceLock::new(),
                init_lock: Mutex::new(()),
                loader: Some(Box::new(loader)),
            }),
        }
    }

    /// Lazy MiniLM handle for the given config.
    pub fn lazy_minilm(config: MiniLmConfig) -> Self {
        Self::lazy(move || {
            let embedder = MiniLmEmbedder::load(config.clone())?;
            Ok(Arc::new(embedder) as Arc<dyn Embedder>)
        })
    }

    /// Returns the loaded embedder, loading it first if this is a lazy handle.
    ///
    /// A failed load is not cached: the error goes back to the caller and no retry happens
    /// here. Callers treat it as fatal.
    pub fn get(&self) -> Result<Arc<dyn Embedder>, EmbeddingError> {
        if let Some(embedder) = self.inner.cell.get() {
            return Ok(Arc::clone(embedder));
        }

        let _guard = self.inner.init_lock.lock();

        if let Some(embedder) = self.inner.cell.get() {
            return Ok(Arc::clone(embedder));
        }

        let Some(loader) = self.inner.loader.as_ref() else {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedder handle has neither a model nor a loader".to_string(),
            });
        };

        info!("Initializing embedding model (first use)");
        let embedder = loader().inspect_err(|e| {
            error!(error = %e, "Embedding model initialization failed");
        })?;

        let embedder = self.inner.cell.get_or_init(|| embedder);
        Ok(Arc::clone(embedder))
    }

    /// `true` once the model has been loaded.
    pub fn is_initialized(&self) -> bool {
        self.inner.cell.get().is_some()
    }

    /// `Some(is_stub)` once loaded, `None` before.
    pub fn is_stub(&self) -> Option<bool> {
        self.inner.cell.get().map(|e| e.is_stub())
    }
}
