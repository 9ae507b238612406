//! Cosine scoring and best-match selection.
//!
//! [`SimilarityScorer`] is the only place that turns texts into scores. Both policies
//! (originality and scene matching) are thin threshold rules on top of
//! [`SimilarityScorer::best_match`].

pub mod error;
pub mod scorer;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ScoringError;
pub use scorer::{SimilarityScorer, cosine_similarity};
pub use types::{CandidateScore, MatchCandidate, MatchResult};
