use thiserror::Error;

use crate::constants::ThresholdError;
use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("invalid threshold: {0}")]
    InvalidThreshold(#[from] ThresholdError),
}
