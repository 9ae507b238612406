use super::error::EmbeddingError;

/// Text → fixed-length vector.
///
/// Implementations must be deterministic for a given input and safe to call from many threads
/// at once; the scorer and both policies only ever see this trait.
pub trait Embedder: Send + Sync {
    /// Embeds one text. Empty input is allowed and is model-defined.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Length of every vector returned by [`embed`](Embedder::embed).
    fn embedding_dim(&self) -> usize;

    /// `true` when vectors come from the hashed stub rather than a real model.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<E: Embedder + ?Sized> Embedder for std::sync::Arc<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}
