//! Runs the router on a real socket and talks to it over HTTP.

use std::net::SocketAddr;

use screenwriter::gateway::{HandlerState, create_router_with_state};
use screenwriter::{EmbedderHandle, MiniLmConfig, MockOverviewSource, MovieOverview};
use tokio::net::TcpListener;

struct TestServer {
    addr: SocketAddr,
    source: MockOverviewSource,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn spawn_server() -> TestServer {
    let source = MockOverviewSource::new().with_results(
        "Night Watch",
        vec![MovieOverview::new(
            1,
            "Night Watch",
            "A lone man fights crime in a dark city.",
        )],
    );
    let handle = EmbedderHandle::load_eager(MiniLmConfig::stub()).expect("stub loads");
    let app = create_router_with_state(HandlerState::new(handle, source.clone()));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });

    TestServer { addr, source }
}

#[tokio::test]
async fn test_health_over_http() {
    let server = spawn_server().await;

    let response = reqwest::get(server.url("/healthz")).await.expect("request");
    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["x-screenwriter-status"].to_str().unwrap(),
        "healthy"
    );
}

#[tokio::test]
async fn test_originality_round_trip() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(server.url("/api/check-originality"))
        .json(&serde_json::json!({
            "title": "Night Watch",
            "synopsis": "A man fights crime in a dark city."
        }))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");

    assert_eq!(body["is_blocked"], true);
    assert_eq!(body["candidates_found"], 1);
    assert_eq!(server.source.calls(), 1);
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, server.url("/api/match-scene"))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("request");

    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = spawn_server().await;

    let response = reqwest::get(server.url("/api/unknown")).await.expect("request");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
