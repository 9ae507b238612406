use std::collections::HashMap;
use std::time::Duration;

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use tokio::net::TcpListener;

use super::*;

const FIXTURE: &str = r#"{
    "page": 1,
    "results": [
        {"id": 155, "title": "The Dark Knight", "overview": "Batman raises the stakes in his war on crime.", "release_date": "2008-07-16", "popularity": 80.1},
        {"id": 272, "title": "Batman Begins", "overview": null},
        {"id": 364, "title": "Batman Returns"},
        {"id": "tt0096895", "title": "Batman", "overview": "The Joker terrorizes Gotham."},
        {"id": 414906, "title": null, "overview": "Batman ventures into Gotham's underworld."}
    ],
    "total_results": 5
}"#;

async fn spawn_fixture_server() -> String {
    async fn search(
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Json<serde_json::Value>, StatusCode> {
        if params.get("api_key").map(String::as_str) != Some("test-key") {
            return Err(StatusCode::UNAUTHORIZED);
        }
        if params.get("query").map(String::as_str) == Some("empty") {
            return Ok(Json(serde_json::json!({ "page": 1 })));
        }
        serde_json::from_str(FIXTURE)
            .map(Json)
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
    }

    let app = Router::new().route("/3/search/movie", get(search));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/3")
}

fn client_for(base_url: &str, key: &str) -> TmdbClient {
    TmdbClient::new(
        TmdbConfig::new(key)
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap()
}

mod overview_tests {
    use super::*;

    #[test]
    fn test_overview_is_comparable_text() {
        let movie = MovieOverview::new(1, "Heat", "A thief and a detective collide.");
        assert_eq!(movie.comparable_text(), Some("A thief and a detective collide."));

        let missing = MovieOverview {
            overview: None,
            ..movie
        };
        assert_eq!(missing.comparable_text(), None);
    }

    #[test]
    fn test_overview_tolerates_missing_and_null_fields() {
        let sparse: MovieOverview = serde_json::from_str(r#"{"id": 364}"#).unwrap();
        assert_eq!(sparse.id, 364);
        assert!(sparse.title.is_none());
        assert!(sparse.overview.is_none());

        let nulls: MovieOverview =
            serde_json::from_str(r#"{"title": null, "overview": null, "release_date": null}"#)
                .unwrap();
        assert_eq!(nulls.id, 0);
        assert!(nulls.title.is_none());

        let dated: MovieOverview = serde_json::from_str(
            r#"{"id": 155, "title": "The Dark Knight", "release_date": "2008-07-16", "popularity": 80.1}"#,
        )
        .unwrap();
        assert_eq!(dated.release_date.as_deref(), Some("2008-07-16"));
    }
}

mod tmdb_tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        let result = TmdbClient::new(TmdbConfig::default());
        assert!(matches!(result, Err(SourceError::MissingApiKey)));
    }

    #[test]
    fn test_search_url_joins_base() {
        let client = client_for("https://api.themoviedb.org/3/", "k");
        assert_eq!(
            client.search_url().as_str(),
            "https://api.themoviedb.org/3/search/movie"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let result = TmdbClient::new(TmdbConfig::new("k").with_base_url("not a url"));
        assert!(matches!(result, Err(SourceError::InvalidBaseUrl { .. })));

        let result = TmdbClient::new(TmdbConfig::new("k").with_base_url("ftp://example.com"));
        assert!(matches!(result, Err(SourceError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = TmdbConfig::new("super-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));

        let client = TmdbClient::new(config).unwrap();
        assert!(!format!("{client:?}").contains("super-secret"));
    }

    #[tokio::test]
    async fn test_search_parses_results() {
        let base = spawn_fixture_server().await;
        let client = client_for(&base, "test-key");

        let results = client.search_overviews("Batman").await;

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].id, 155);
        assert_eq!(results[0].title.as_deref(), Some("The Dark Knight"));
        assert!(results[1].overview.is_none());
    }

    #[tokio::test]
    async fn test_malformed_hit_is_skipped_not_fatal() {
        let base = spawn_fixture_server().await;
        let client = client_for(&base, "test-key");

        let results = client.try_search("Batman").await.unwrap();

        assert!(results.iter().all(|m| m.title.as_deref() != Some("Batman")));
        let untitled = results.last().unwrap();
        assert_eq!(untitled.id, 414906);
        assert!(untitled.title.is_none());
        assert_eq!(
            untitled.comparable_text(),
            Some("Batman ventures into Gotham's underworld.")
        );
    }

    #[tokio::test]
    async fn test_missing_results_field_is_empty() {
        let base = spawn_fixture_server().await;
        let client = client_for(&base, "test-key");

        assert!(client.try_search("empty").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_error_status_yields_empty_list() {
        let base = spawn_fixture_server().await;
        let client = client_for(&base, "wrong-key");

        let err = client.try_search("Batman").await.unwrap_err();
        assert!(matches!(err, SourceError::UnexpectedStatus { status: 401, .. }));

        assert!(client.search_overviews("Batman").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_empty_list() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{addr}/3"), "test-key");
        assert!(client.search_overviews("Batman").await.is_empty());
    }
}

mod configured_source_tests {
    use super::*;

    #[tokio::test]
    async fn test_without_key_uses_noop() {
        let source = ConfiguredSource::from_config(TmdbConfig::default()).unwrap();

        assert!(matches!(source, ConfiguredSource::Noop(_)));
        assert_eq!(source.source_name(), "none");
        assert!(source.search_overviews("Anything").await.is_empty());
    }

    #[test]
    fn test_with_key_uses_tmdb() {
        let source = ConfiguredSource::from_config(TmdbConfig::new("k")).unwrap();
        assert!(matches!(source, ConfiguredSource::Tmdb(_)));
        assert_eq!(source.source_name(), "tmdb");
    }
}

mod mock_tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_by_query_and_records_calls() {
        let heat = MovieOverview::new(949, "Heat", "A thief and a detective collide.");
        let source = MockOverviewSource::new()
            .with_results("Heat", vec![heat.clone()])
            .with_default(Vec::new());

        assert_eq!(source.search_overviews("Heat").await, vec![heat]);
        assert!(source.search_overviews("Other").await.is_empty());
        assert_eq!(source.calls(), 2);
        assert_eq!(source.queries(), vec!["Heat".to_string(), "Other".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_clones_share_state() {
        let source = MockOverviewSource::new();
        let clone = source.clone();

        clone.search_overviews("x").await;
        assert_eq!(source.calls(), 1);
    }
}
