//! Screenwriter library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Similarity engine
//! - [`EmbedderHandle`], [`MiniLmEmbedder`], [`MiniLmConfig`] - Sentence embeddings
//! - [`SimilarityScorer`], [`cosine_similarity`] - Scoring and best-match selection
//! - [`OriginalityChecker`] - Synopsis originality policy
//! - [`SceneMatcher`], [`SCENE_CATALOG`] - Famous-line detection
//!
//! ## Writing tools
//! - [`analyze_script`] - Screenplay statistics
//! - [`generator`] - Storyboard, video and query-letter placeholders
//!
//! ## Service
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`gateway`] - Axum router and handlers
//! - [`sources`] - Film overview lookup (TMDB)
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod generator;
pub mod hashing;
pub mod originality;
pub mod scenes;
pub mod scoring;
pub mod sources;

pub use analyzer::{ScriptStats, analyze_script};
pub use config::{Config, ConfigError, EmbedderMode};
pub use constants::{
    DEFAULT_ORIGINALITY_THRESHOLD, DEFAULT_SCENE_THRESHOLD, MIN_SCENE_QUERY_CHARS, ThresholdError,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    DEFAULT_MODEL_REPO, Embedder, EmbedderHandle, EmbeddingError, MINILM_EMBEDDING_DIM,
    MiniLmConfig, MiniLmEmbedder, ModelCache,
};
pub use originality::{OriginalityChecker, OriginalityVerdict};
pub use scenes::{EnrichedMatch, SCENE_CATALOG, SceneMatcher, SceneRecord};
pub use scoring::{MatchCandidate, MatchResult, ScoringError, SimilarityScorer, cosine_similarity};
#[cfg(any(test, feature = "mock"))]
pub use sources::MockOverviewSource;
pub use sources::{MovieOverview, OverviewSource, TmdbClient};
