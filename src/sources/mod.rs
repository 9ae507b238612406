//! Film overview lookup used by the originality check.
//!
//! A source turns a search query (the working title) into a list of [`MovieOverview`]s.
//! Sources never fail the caller: lookup problems are logged and produce an empty list, which
//! the originality check treats as "nothing similar found".

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod tmdb;

#[cfg(test)]
mod tests;

pub use error::SourceError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockOverviewSource;
pub use tmdb::{DEFAULT_TMDB_URL, TmdbClient, TmdbConfig};

use serde::{Deserialize, Serialize};

use crate::scoring::MatchCandidate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One search hit from a film metadata service.
pub struct MovieOverview {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    /// Plot summary. Absent or null for some entries.
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl MovieOverview {
    pub fn new(id: u64, title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            overview: Some(overview.into()),
            release_date: None,
        }
    }
}

impl MatchCandidate for MovieOverview {
    fn comparable_text(&self) -> Option<&str> {
        self.overview.as_deref()
    }
}

/// Looks up overviews of existing films.
pub trait OverviewSource: Send + Sync {
    /// Returns overviews for films matching `query`. Empty on any lookup failure.
    fn search_overviews(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Vec<MovieOverview>> + Send;

    /// Short label for readiness reporting.
    fn source_name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
/// Source used when no metadata API is configured.
pub struct NoopOverviewSource;

impl OverviewSource for NoopOverviewSource {
    async fn search_overviews(&self, query: &str) -> Vec<MovieOverview> {
        tracing::debug!(query, "No overview source configured");
        Vec::new()
    }

    fn source_name(&self) -> &'static str {
        "none"
    }
}

#[derive(Debug, Clone)]
/// Either a live TMDB client or the no-op source, chosen at startup.
pub enum ConfiguredSource {
    Tmdb(TmdbClient),
    Noop(NoopOverviewSource),
}

impl ConfiguredSource {
    /// TMDB when an API key is present, otherwise the no-op source.
    pub fn from_config(config: TmdbConfig) -> Result<Self, SourceError> {
        if config.api_key.is_none() {
            tracing::warn!("No TMDB_API_KEY configured, originality checks will find no candidates");
            return Ok(Self::Noop(NoopOverviewSource));
        }
        Ok(Self::Tmdb(TmdbClient::new(config)?))
    }
}

impl OverviewSource for ConfiguredSource {
    async fn search_overviews(&self, query: &str) -> Vec<MovieOverview> {
        match self {
            Self::Tmdb(client) => client.search_overviews(query).await,
            Self::Noop(noop) => noop.search_overviews(query).await,
        }
    }

    fn source_name(&self) -> &'static str {
        match self {
            Self::Tmdb(client) => client.source_name(),
            Self::Noop(noop) => noop.source_name(),
        }
    }
}
