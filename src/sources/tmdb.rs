use std::fmt;
use std::time::Duration;

use reqwest::{Client as HttpClient, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use super::{MovieOverview, OverviewSource, SourceError};

pub const DEFAULT_TMDB_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_TMDB_URL.to_string(),
            timeout: DEFAULT_TMDB_TIMEOUT,
        }
    }
}

impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Hits stay untyped until [`parse_hits`] so one malformed entry cannot sink the page.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

fn parse_hits(hits: Vec<serde_json::Value>) -> Vec<MovieOverview> {
    hits.into_iter()
        .enumerate()
        .filter_map(|(position, hit)| match serde_json::from_value(hit) {
            Ok(movie) => Some(movie),
            Err(e) => {
                debug!(position, error = %e, "Skipping malformed TMDB result");
                None
            }
        })
        .collect()
}

/// Movie search against the TMDB v3 API.
#[derive(Clone)]
pub struct TmdbClient {
    http: HttpClient,
    search_url: Url,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, SourceError> {
        let api_key = config.api_key.ok_or(SourceError::MissingApiKey)?;
        let search_url = search_url(&config.base_url)?;

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SourceError::ClientBuild)?;

        Ok(Self {
            http,
            search_url,
            api_key,
        })
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Runs the search and surfaces failures.
    pub async fn try_search(&self, query: &str) -> Result<Vec<MovieOverview>, SourceError> {
        let response = self
            .http
            .get(self.search_url.clone())
            .query(&[("query", query), ("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.search_url.to_string(),
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(parse_hits(body.results))
    }
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("search_url", &self.search_url.as_str())
            .finish_non_exhaustive()
    }
}

impl OverviewSource for TmdbClient {
    async fn search_overviews(&self, query: &str) -> Vec<MovieOverview> {
        match self.try_search(query).await {
            Ok(results) => {
                debug!(query, results = results.len(), "TMDB search complete");
                results
            }
            Err(e) => {
                warn!(query, error = %e, "TMDB search failed, continuing without candidates");
                Vec::new()
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "tmdb"
    }
}

fn search_url(base_url: &str) -> Result<Url, SourceError> {
    let joined = format!("{}/search/movie", base_url.trim_end_matches('/'));
    let url = Url::parse(&joined).map_err(|e| SourceError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SourceError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
