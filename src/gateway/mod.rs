//! HTTP gateway (Axum) for the originality, scene and writing-tool endpoints.
//!
//! This module is primarily used by the `screenwriter` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::GatewayError;
pub use handler::{
    analyze_script_handler, check_originality_handler, generate_query_handler,
    generate_storyboard_handler, generate_video_handler, match_scene_handler, root_handler,
};
pub use state::HandlerState;

use crate::sources::OverviewSource;

/// Response header carrying a short machine-readable status.
pub const STATUS_HEADER: &str = "x-screenwriter-status";
pub const STATUS_HEALTHY: &str = "healthy";
pub const STATUS_READY: &str = "ready";
pub const STATUS_PENDING: &str = "pending";

pub fn create_router_with_state<O>(state: HandlerState<O>) -> Router
where
    O: OverviewSource + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<O>))
        .route("/api/check-originality", post(check_originality_handler::<O>))
        .route("/api/match-scene", post(match_scene_handler::<O>))
        .route("/api/generate-storyboard", post(generate_storyboard_handler))
        .route("/api/generate-video", post(generate_video_handler))
        .route("/api/generate-query", post(generate_query_handler))
        .route("/api/analyze-script", post(analyze_script_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub embedding: &'static str,
    pub embedder_mode: &'static str,
    pub overview_source: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(STATUS_HEADER, HeaderValue::from_static(STATUS_HEALTHY));

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<O>(State(state): State<HandlerState<O>>) -> Response
where
    O: OverviewSource + Clone + Send + Sync + 'static,
{
    let embedding_status = if state.embedder.is_initialized() {
        STATUS_READY
    } else {
        STATUS_PENDING
    };

    let embedder_mode = match state.embedder.is_stub() {
        Some(true) => "stub",
        Some(false) => "real",
        None => "unloaded",
    };

    let components = ComponentStatus {
        http: STATUS_READY,
        embedding: embedding_status,
        embedder_mode,
        overview_source: state.source.source_name(),
    };

    let is_ready = components.embedding == STATUS_READY;

    let status_code = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status_msg = if is_ready { "ok" } else { STATUS_PENDING };

    let mut headers = HeaderMap::new();
    headers.insert(STATUS_HEADER, HeaderValue::from_static(status_msg));

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
