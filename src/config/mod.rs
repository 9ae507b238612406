//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SCREENWRITER_*` environment variables
//! (plus `TMDB_API_KEY` for the film metadata service). The embedder always runs the real
//! model unless `SCREENWRITER_EMBEDDER=stub` is set.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_ORIGINALITY_THRESHOLD, DEFAULT_SCENE_THRESHOLD, validate_threshold};
use crate::embedding::{DEFAULT_MODEL_REPO, EmbeddingError, MiniLmConfig, ModelCache};
use crate::sources::{DEFAULT_TMDB_URL, TmdbConfig};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Which embedder serves scores. Default: the MiniLM model.
    pub embedder: EmbedderMode,

    /// Sentence-embedding model directory. `None` uses the hub checkpoint in `model_cache_dir`.
    pub model_path: Option<PathBuf>,

    /// Where the hub checkpoint is downloaded to. Default: the platform cache dir.
    pub model_cache_dir: PathBuf,

    /// Synopses scoring strictly above this are blocked. Default: `0.7`.
    pub originality_threshold: f32,

    /// Scene excerpts scoring at or above this match a famous line. Default: `0.6`.
    pub scene_threshold: f32,

    /// Film metadata search settings.
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedderMode {
    /// all-MiniLM-L6-v2; startup fails if it cannot be loaded.
    #[default]
    Model,
    /// Hashed bag-of-words vectors. Not semantic; for local development only.
    Stub,
}

impl EmbedderMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "model" | "minilm" => Some(Self::Model),
            "stub" => Some(Self::Stub),
            _ => None,
        }
    }
}

/// Default HTTP port used when `SCREENWRITER_PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            embedder: EmbedderMode::Model,
            model_path: None,
            model_cache_dir: ModelCache::default_dir(),
            originality_threshold: DEFAULT_ORIGINALITY_THRESHOLD,
            scene_threshold: DEFAULT_SCENE_THRESHOLD,
            tmdb: TmdbConfig::default(),
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "SCREENWRITER_PORT";
    const ENV_BIND_ADDR: &'static str = "SCREENWRITER_BIND_ADDR";
    const ENV_EMBEDDER: &'static str = MiniLmConfig::ENV_EMBEDDER;
    const ENV_MODEL_PATH: &'static str = MiniLmConfig::ENV_MODEL_PATH;
    const ENV_MODEL_CACHE: &'static str = "SCREENWRITER_MODEL_CACHE";
    const ENV_ORIGINALITY_THRESHOLD: &'static str = "SCREENWRITER_ORIGINALITY_THRESHOLD";
    const ENV_SCENE_THRESHOLD: &'static str = "SCREENWRITER_SCENE_THRESHOLD";
    const ENV_TMDB_API_KEY: &'static str = "TMDB_API_KEY";
    const ENV_TMDB_URL: &'static str = "SCREENWRITER_TMDB_URL";
    const ENV_TMDB_TIMEOUT_SECS: &'static str = "SCREENWRITER_TMDB_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let embedder = Self::parse_embedder_from_env(defaults.embedder)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let model_cache_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_CACHE)
            .unwrap_or(defaults.model_cache_dir);
        let originality_threshold = Self::parse_threshold_from_env(
            Self::ENV_ORIGINALITY_THRESHOLD,
            defaults.originality_threshold,
        )?;
        let scene_threshold =
            Self::parse_threshold_from_env(Self::ENV_SCENE_THRESHOLD, defaults.scene_threshold)?;

        let tmdb = TmdbConfig {
            api_key: Self::parse_optional_string_from_env(Self::ENV_TMDB_API_KEY),
            base_url: Self::parse_string_from_env(Self::ENV_TMDB_URL, DEFAULT_TMDB_URL.to_string()),
            timeout: Duration::from_secs(Self::parse_u64_from_env(
                Self::ENV_TMDB_TIMEOUT_SECS,
                defaults.tmdb.timeout.as_secs(),
            )),
        };

        Ok(Self {
            port,
            bind_addr,
            embedder,
            model_path,
            model_cache_dir,
            originality_threshold,
            scene_threshold,
            tmdb,
        })
    }

    /// Validates paths and thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        for (name, value) in [
            (Self::ENV_ORIGINALITY_THRESHOLD, self.originality_threshold),
            (Self::ENV_SCENE_THRESHOLD, self.scene_threshold),
        ] {
            validate_threshold(value).map_err(|source| ConfigError::InvalidThreshold { name, source })?;
        }

        if self.tmdb.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                name: Self::ENV_TMDB_TIMEOUT_SECS,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Hub cache the model is fetched into when no `model_path` is set.
    pub fn model_cache(&self) -> ModelCache {
        ModelCache::new(self.model_cache_dir.clone(), DEFAULT_MODEL_REPO)
    }

    /// Embedder settings for startup.
    ///
    /// Stub mode only when [`EmbedderMode::Stub`] was chosen. Otherwise the configured model
    /// directory, or the hub checkpoint (downloaded on first run). Blocking.
    pub fn resolve_minilm_config(&self) -> Result<MiniLmConfig, EmbeddingError> {
        let base = match (self.embedder, &self.model_path) {
            (EmbedderMode::Stub, _) => MiniLmConfig::stub(),
            (EmbedderMode::Model, Some(path)) => MiniLmConfig::new(path.clone()),
            (EmbedderMode::Model, None) => MiniLmConfig::default(),
        };
        base.resolve_model_dir(&self.model_cache())
    }

    fn parse_embedder_from_env(default: EmbedderMode) -> Result<EmbedderMode, ConfigError> {
        match env::var(Self::ENV_EMBEDDER) {
            Ok(value) => {
                EmbedderMode::parse(&value).ok_or(ConfigError::InvalidEmbedder { value })
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_threshold_from_env(name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(name) {
            Ok(value) => {
                value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::ThresholdParseError {
                        name,
                        value: value.clone(),
                        source: e,
                    })
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::parse_optional_string_from_env(var_name).map(PathBuf::from)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
