//! Embedding + model utilities.
//!
//! - [`provider`] defines the [`Embedder`] seam every consumer depends on.
//! - [`minilm`] provides the sentence-embedding model (and its hashed stub).
//! - [`handle`] holds the single process-wide model instance.

/// BERT encoder wrapper and pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Load-once embedder handle.
pub mod handle;
/// MiniLM sentence embedder.
pub mod minilm;
/// Preset-vector embedder for tests.
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// The embedder trait.
pub mod provider;
/// Tokenizer loading and vector helpers.
pub mod utils;

pub use error::EmbeddingError;
pub use handle::EmbedderHandle;
pub use minilm::{
    DEFAULT_MODEL_REPO, MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder,
    ModelCache,
};
pub use provider::Embedder;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
