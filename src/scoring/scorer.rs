use std::sync::Arc;

use tracing::debug;

use crate::embedding::{Embedder, EmbedderHandle};

use super::error::ScoringError;
use super::types::{CandidateScore, MatchCandidate, MatchResult};

/// Cosine similarity, `dot(a, b) / (|a| * |b|)`.
///
/// Returns 0.0 for mismatched lengths, empty vectors, or a zero-norm side.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Embeds texts through the shared handle and compares them.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    embedder: EmbedderHandle,
}

impl SimilarityScorer {
    pub fn new(embedder: EmbedderHandle) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &EmbedderHandle {
        &self.embedder
    }

    fn model(&self) -> Result<Arc<dyn Embedder>, ScoringError> {
        Ok(self.embedder.get()?)
    }

    /// Similarity of two texts. Either side empty → 0.0 without touching the model.
    pub fn score(&self, a: &str, b: &str) -> Result<f32, ScoringError> {
        if a.is_empty() || b.is_empty() {
            return Ok(0.0);
        }

        let model = self.model()?;
        let va = model.embed(a)?;
        let vb = model.embed(b)?;
        Ok(cosine_similarity(&va, &vb))
    }

    /// Scores every candidate against `query`, in input order.
    ///
    /// The query is embedded once. Candidates without comparable text are reported as skipped.
    /// An empty query scores nothing and embeds nothing.
    pub fn score_candidates<C: MatchCandidate>(
        &self,
        query: &str,
        candidates: &[C],
    ) -> Result<Vec<CandidateScore>, ScoringError> {
        if query.is_empty() || candidates.is_empty() {
            return Ok(candidates
                .iter()
                .enumerate()
                .map(|(index, _)| CandidateScore { index, score: None })
                .collect());
        }

        let model = self.model()?;
        let query_embedding = model.embed(query)?;

        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| -> Result<CandidateScore, ScoringError> {
                let score = match candidate.comparable_text().filter(|t| !t.is_empty()) {
                    Some(text) => {
                        let embedding = model.embed(text)?;
                        Some(cosine_similarity(&query_embedding, &embedding))
                    }
                    None => None,
                };
                Ok(CandidateScore { index, score })
            })
            .collect()
    }

    /// Highest-scoring candidate over a full scan.
    ///
    /// Ties keep the earlier candidate (strict `>`), so with unordered inputs such as search
    /// results the winner among equal scores depends on input order. Scores at or below 0.0
    /// never produce a match.
    pub fn best_match<'c, C: MatchCandidate>(
        &self,
        query: &str,
        candidates: &'c [C],
    ) -> Result<MatchResult<&'c C>, ScoringError> {
        let scores = self.score_candidates(query, candidates)?;

        let mut result = MatchResult::empty();
        for scored in &scores {
            let Some(score) = scored.score else {
                continue;
            };

            debug!(index = scored.index, score, "Scored candidate");

            if score > result.best_score {
                result.best_score = score;
                result.best_candidate = Some(&candidates[scored.index]);
            }
        }

        debug!(
            query_len = query.len(),
            num_candidates = candidates.len(),
            best_score = result.best_score,
            matched = result.has_match(),
            "Best-match scan complete"
        );

        Ok(result)
    }
}
