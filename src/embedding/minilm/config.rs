use std::path::PathBuf;

use crate::embedding::bert::{CONFIG_FILE, TOKENIZER_FILE, WEIGHTS_FILE};
use crate::embedding::error::EmbeddingError;

use super::fetch::ModelCache;

/// Default MiniLM embedding dimension.
pub const MINILM_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default MiniLM max sequence length.
pub const MINILM_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

#[derive(Debug, Clone)]
/// Configuration for [`MiniLmEmbedder`](super::MiniLmEmbedder).
pub struct MiniLmConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Output embedding dimension.
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for MiniLmConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: MINILM_MAX_SEQ_LEN,
            embedding_dim: MINILM_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl MiniLmConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_PATH: &'static str = "SCREENWRITER_MODEL_PATH";

    /// Env var selecting the embedder; `stub` opts into hashed bag-of-words vectors.
    pub const ENV_EMBEDDER: &'static str = "SCREENWRITER_EMBEDDER";

    /// Loads config from the environment.
    ///
    /// Stub mode only when `SCREENWRITER_EMBEDDER=stub`. An unset model path leaves `model_dir`
    /// empty; fill it with [`MiniLmConfig::resolve_model_dir`] before loading.
    pub fn from_env() -> Self {
        let stub_requested = std::env::var(Self::ENV_EMBEDDER)
            .is_ok_and(|v| v.trim().eq_ignore_ascii_case("stub"));
        if stub_requested {
            return Self::stub();
        }

        std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Points an unset `model_dir` at the hub checkpoint in `cache`, downloading it if needed.
    ///
    /// Stub configs and configs with an explicit directory pass through untouched. Blocking.
    pub fn resolve_model_dir(mut self, cache: &ModelCache) -> Result<Self, EmbeddingError> {
        if self.testing_stub || !self.model_dir.as_os_str().is_empty() {
            return Ok(self);
        }
        self.model_dir = cache.ensure_model()?;
        Ok(self)
    }

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Overrides the stub/model output dimension.
    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join(CONFIG_FILE)
    }

    pub fn weights_path(&self) -> PathBuf {
        self.model_dir.join(WEIGHTS_FILE)
    }

    pub fn tokenizer_path(&self) -> PathBuf {
        self.model_dir.join(TOKENIZER_FILE)
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }

        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        Ok(())
    }

    /// Returns `true` if every file the model needs is present.
    pub fn model_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty()
            && self.config_path().is_file()
            && self.weights_path().is_file()
            && self.tokenizer_path().is_file()
    }

    /// First missing model file, if any.
    pub fn missing_file(&self) -> Option<PathBuf> {
        [
            self.config_path(),
            self.weights_path(),
            self.tokenizer_path(),
        ]
        .into_iter()
        .find(|p| !p.is_file())
    }
}
