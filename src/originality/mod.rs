//! Synopsis originality check.
//!
//! Compares a synopsis with overviews of existing films and reports the closest one.
//! The blocking decision is a separate step ([`OriginalityChecker::is_blocked`]) so callers
//! can apply their own threshold to the same verdict.

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::info;

use crate::constants::{DEFAULT_ORIGINALITY_THRESHOLD, validate_threshold};
use crate::scoring::{MatchCandidate, ScoringError, SimilarityScorer};

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Closest overview found for a synopsis.
pub struct OriginalityVerdict {
    /// Best similarity (0.0 when nothing matched).
    pub score: f32,
    /// The overview that produced `score`, or empty.
    pub matched_text: String,
}

impl OriginalityVerdict {
    /// Strictly-greater rule: a score equal to the threshold is not blocked.
    pub fn is_blocked(&self, threshold: f32) -> bool {
        self.score > threshold
    }
}

#[derive(Debug, Clone)]
pub struct OriginalityChecker {
    scorer: SimilarityScorer,
    threshold: f32,
}

impl OriginalityChecker {
    pub fn new(scorer: SimilarityScorer) -> Self {
        Self {
            scorer,
            threshold: DEFAULT_ORIGINALITY_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Result<Self, ScoringError> {
        validate_threshold(threshold)?;
        self.threshold = threshold;
        Ok(self)
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Finds the overview most similar to `synopsis`.
    ///
    /// Missing or empty overviews are skipped; an empty list gives a 0.0 verdict.
    pub fn check_originality<C: MatchCandidate>(
        &self,
        synopsis: &str,
        overviews: &[C],
    ) -> Result<OriginalityVerdict, ScoringError> {
        let result = self.scorer.best_match(synopsis, overviews)?;

        let matched_text = result
            .best_candidate
            .and_then(|c| c.comparable_text())
            .unwrap_or_default()
            .to_string();

        Ok(OriginalityVerdict {
            score: result.best_score,
            matched_text,
        })
    }

    /// Applies this checker's threshold to a verdict.
    pub fn is_blocked(&self, verdict: &OriginalityVerdict) -> bool {
        let blocked = verdict.is_blocked(self.threshold);
        info!(
            score = verdict.score,
            threshold = self.threshold,
            blocked,
            "Originality decision"
        );
        blocked
    }
}
