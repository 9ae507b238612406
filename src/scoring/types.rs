/// Anything the selector can compare against a query.
///
/// Returning `None` (or an empty string) marks the candidate as non-matching; it is skipped
/// without embedding and never fails the scan.
pub trait MatchCandidate {
    fn comparable_text(&self) -> Option<&str>;
}

impl MatchCandidate for String {
    fn comparable_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl MatchCandidate for str {
    fn comparable_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl MatchCandidate for Option<String> {
    fn comparable_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl<C: MatchCandidate + ?Sized> MatchCandidate for &C {
    fn comparable_text(&self) -> Option<&str> {
        (**self).comparable_text()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Outcome of a best-match scan.
pub struct MatchResult<C> {
    /// Highest score seen (0.0 when nothing scored above zero).
    pub best_score: f32,
    /// First candidate that reached `best_score`.
    pub best_candidate: Option<C>,
}

impl<C> MatchResult<C> {
    /// The result for an empty collection (or an empty query).
    pub fn empty() -> Self {
        Self {
            best_score: 0.0,
            best_candidate: None,
        }
    }

    /// `true` if some candidate scored above zero.
    pub fn has_match(&self) -> bool {
        self.best_candidate.is_some()
    }

    pub fn map<D, F: FnOnce(C) -> D>(self, f: F) -> MatchResult<D> {
        MatchResult {
            best_score: self.best_score,
            best_candidate: self.best_candidate.map(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Score for one candidate, by position in the input collection.
pub struct CandidateScore {
    pub index: usize,
    /// `None` when the candidate had no comparable text and was skipped.
    pub score: Option<f32>,
}

impl CandidateScore {
    /// Score with skipped candidates counted as 0.0.
    pub fn value(&self) -> f32 {
        self.score.unwrap_or(0.0)
    }

    pub fn was_skipped(&self) -> bool {
        self.score.is_none()
    }
}
