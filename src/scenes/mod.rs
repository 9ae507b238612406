//! Famous-line detection for scene excerpts.
//!
//! A scene excerpt is compared with every line in [`SCENE_CATALOG`]; the closest line is
//! reported when it scores at or above the threshold (inclusive, unlike the strict rule used
//! by [`crate::originality`]).

pub mod catalog;


pub use catalog::{SCENE_CATALOG, SceneRecord, find_by_film};

use serde::Serialize;
use tracing::{debug, info};

use crate::constants::{DEFAULT_SCENE_THRESHOLD, MIN_SCENE_QUERY_CHARS, validate_threshold};
use crate::scoring::{ScoringError, SimilarityScorer};

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A catalog record plus how closely the excerpt matched it.
pub struct EnrichedMatch {
    #[serde(flatten)]
    pub record: SceneRecord,
    /// `round(score * 100)`, halves rounded away from zero, clamped to `0..=100`.
    pub match_score: u8,
}

impl EnrichedMatch {
    pub fn new(record: SceneRecord, score: f32) -> Self {
        Self {
            record,
            match_score: score_to_percent(score),
        }
    }
}

/// Converts a similarity into an integer percentage.
pub fn score_to_percent(score: f32) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

/// `true` if `text` is too short to compare with full quoted lines.
pub fn is_too_short(text: &str) -> bool {
    text.chars().count() < MIN_SCENE_QUERY_CHARS
}

#[derive(Debug, Clone)]
pub struct SceneMatcher {
    scorer: SimilarityScorer,
    threshold: f32,
    catalog: &'static [SceneRecord],
}

impl SceneMatcher {
    pub fn new(scorer: SimilarityScorer) -> Self {
        Self {
            scorer,
            threshold: DEFAULT_SCENE_THRESHOLD,
            catalog: SCENE_CATALOG,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Result<Self, ScoringError> {
        validate_threshold(threshold)?;
        self.threshold = threshold;
        Ok(self)
    }

    /// Replaces the built-in catalog.
    pub fn with_catalog(mut self, catalog: &'static [SceneRecord]) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn catalog(&self) -> &'static [SceneRecord] {
        self.catalog
    }

    /// Finds the catalog line `user_text` most resembles, at the configured threshold.
    pub fn find_matching_scene(&self, user_text: &str) -> Result<Option<EnrichedMatch>, ScoringError> {
        self.find_matching_scene_at(user_text, self.threshold)
    }

    /// Same as [`find_matching_scene`](Self::find_matching_scene) with an explicit threshold.
    ///
    /// Texts shorter than 20 characters return `None` before any embedding work.
    pub fn find_matching_scene_at(
        &self,
        user_text: &str,
        threshold: f32,
    ) -> Result<Option<EnrichedMatch>, ScoringError> {
        if is_too_short(user_text) {
            debug!(
                text_len = user_text.chars().count(),
                min = MIN_SCENE_QUERY_CHARS,
                "Scene text too short to compare"
            );
            return Ok(None);
        }

        let result = self.scorer.best_match(user_text, self.catalog)?;

        let Some(record) = result.best_candidate else {
            debug!("No catalog line scored above zero");
            return Ok(None);
        };

        if result.best_score >= threshold {
            let matched = EnrichedMatch::new(*record, result.best_score);
            info!(
                film = record.film,
                score = result.best_score,
                match_score = matched.match_score,
                "Scene excerpt matches a famous line"
            );
            Ok(Some(matched))
        } else {
            debug!(
                film = record.film,
                score = result.best_score,
                threshold,
                "Closest catalog line below threshold"
            );
            Ok(None)
        }
    }
}
