//! Local cache for the all-MiniLM-L6-v2 checkpoint, filled from the Hugging Face hub on first use.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::embedding::bert::{CONFIG_FILE, TOKENIZER_FILE, WEIGHTS_FILE};
use crate::embedding::error::EmbeddingError;

/// Hub repository the server embeds with.
pub const DEFAULT_MODEL_REPO: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Files a checkpoint directory must hold.
pub const MODEL_FILES: [&str; 3] = [CONFIG_FILE, TOKENIZER_FILE, WEIGHTS_FILE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCache {
    pub cache_dir: PathBuf,
    pub repo_id: String,
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new(Self::default_dir(), DEFAULT_MODEL_REPO)
    }
}

impl ModelCache {
    pub fn new(cache_dir: impl Into<PathBuf>, repo_id: impl Into<String>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            repo_id: repo_id.into(),
        }
    }

    /// Platform cache dir (e.g. `~/.cache/screenwriter/models`), or `.cache/...` if unknown.
    pub fn default_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("screenwriter")
            .join("models")
    }

    /// Directory the checkpoint lives in: one folder per repo, `/` flattened to `--`.
    pub fn model_dir(&self) -> PathBuf {
        self.cache_dir.join(self.repo_id.replace('/', "--"))
    }

    pub fn is_cached(&self) -> bool {
        let dir = self.model_dir();
        MODEL_FILES.iter().all(|f| dir.join(f).is_file())
    }

    /// Returns the checkpoint directory, downloading any missing files first.
    ///
    /// Blocking; run it off the async runtime.
    pub fn ensure_model(&self) -> Result<PathBuf, EmbeddingError> {
        let dir = self.model_dir();
        if self.is_cached() {
            debug!(path = %dir.display(), "Using cached model");
            return Ok(dir);
        }

        info!(repo = %self.repo_id, path = %dir.display(), "Downloading model files");
        self.download_into(&dir)?;
        Ok(dir)
    }

    fn download_into(&self, dir: &Path) -> Result<(), EmbeddingError> {
        use hf_hub::api::sync::Api;

        let api = Api::new().map_err(|e| self.download_error(e))?;
        let repo = api.model(self.repo_id.clone());

        std::fs::create_dir_all(dir)?;

        for file in MODEL_FILES {
            let dest = dir.join(file);
            if dest.is_file() {
                continue;
            }
            let fetched = repo
                .get(file)
                .map_err(|e| self.download_error(format!("{file}: {e}")))?;
            std::fs::copy(&fetched, &dest)?;
            debug!(file, "Model file cached");
        }

        Ok(())
    }

    fn download_error(&self, reason: impl ToString) -> EmbeddingError {
        EmbeddingError::DownloadFailed {
            repo: self.repo_id.clone(),
            reason: reason.to_string(),
        }
    }
}
