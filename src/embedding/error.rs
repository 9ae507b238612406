use std::path::PathBuf;
use thiserror::Error;

/// Failures from loading or running the sentence-embedding model.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// A model directory or one of its files is absent.
    #[error("model file missing: {}", path.display())]
    ModelNotFound { path: PathBuf },

    /// Model files exist but could not be read or parsed.
    #[error("could not load MiniLM model: {reason}")]
    ModelLoadFailed { reason: String },

    /// Fetching the checkpoint from the model hub failed.
    #[error("could not download {repo}: {reason}")]
    DownloadFailed { repo: String, reason: String },

    #[error("embedding forward pass failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("could not tokenize input: {reason}")]
    TokenizationFailed { reason: String },

    #[error("bad embedder settings: {reason}")]
    InvalidConfig { reason: String },
}

impl EmbeddingError {
    /// Returns `true` for failures that happen while bringing the model up.
    ///
    /// These are fatal for the process; everything else is scoped to one request.
    pub fn is_initialization_failure(&self) -> bool {
        !matches!(
            self,
            Self::InferenceFailed { .. } | Self::TokenizationFailed { .. }
        )
    }
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        Self::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        Self::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
