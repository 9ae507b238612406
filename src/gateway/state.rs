use std::sync::Arc;

use crate::config::Config;
use crate::embedding::EmbedderHandle;
use crate::originality::OriginalityChecker;
use crate::scenes::SceneMatcher;
use crate::scoring::{ScoringError, SimilarityScorer};
use crate::sources::OverviewSource;

#[derive(Clone)]
pub struct HandlerState<O: OverviewSource + Clone + Send + Sync + 'static> {
    pub checker: Arc<OriginalityChecker>,

    pub matcher: Arc<SceneMatcher>,

    /// Shared with the checker and matcher; kept here for readiness reporting.
    pub embedder: EmbedderHandle,

    pub source: O,
}

impl<O> HandlerState<O>
where
    O: OverviewSource + Clone + Send + Sync + 'static,
{
    /// State with default thresholds.
    pub fn new(embedder: EmbedderHandle, source: O) -> Self {
        let scorer = SimilarityScorer::new(embedder.clone());
        Self {
            checker: Arc::new(OriginalityChecker::new(scorer.clone())),
            matcher: Arc::new(SceneMatcher::new(scorer)),
            embedder,
            source,
        }
    }

    /// State with thresholds taken from `config`.
    pub fn from_config(
        config: &Config,
        embedder: EmbedderHandle,
        source: O,
    ) -> Result<Self, ScoringError> {
        let scorer = SimilarityScorer::new(embedder.clone());
        let checker =
            OriginalityChecker::new(scorer.clone()).with_threshold(config.originality_threshold)?;
        let matcher = SceneMatcher::new(scorer).with_threshold(config.scene_threshold)?;

        Ok(Self {
            checker: Arc::new(checker),
            matcher: Arc::new(matcher),
            embedder,
            source,
        })
    }
}
