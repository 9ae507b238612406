use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, info, instrument};

use crate::analyzer::{ScriptStats, analyze_script};
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    OriginalityResponse, QueryLetterResponse, RootResponse, SceneRequest, SynopsisRequest,
};
use crate::gateway::state::HandlerState;
use crate::generator::{
    Storyboard, VideoClip, generate_query_letter, generate_storyboard, generate_video,
};
use crate::scenes::EnrichedMatch;
use crate::sources::OverviewSource;

#[instrument]
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok",
        message: "Screenwriter AI Backend Running",
    })
}

/// Searches existing films by title and scores the synopsis against their overviews.
#[instrument(
    skip(state, request),
    fields(title = %request.title, synopsis_len = request.synopsis.len())
)]
pub async fn check_originality_handler<O>(
    State(state): State<HandlerState<O>>,
    Json(request): Json<SynopsisRequest>,
) -> Result<Json<OriginalityResponse>, GatewayError>
where
    O: OverviewSource + Clone + Send + Sync + 'static,
{
    let candidates = state.source.search_overviews(&request.title).await;
    let candidates_found = candidates.len();
    debug!(candidates_found, "Overview search complete");

    let checker = Arc::clone(&state.checker);
    let synopsis = request.synopsis;
    let verdict = tokio::task::spawn_blocking(move || {
        checker.check_originality(&synopsis, &candidates)
    })
    .await??;

    let is_blocked = state.checker.is_blocked(&verdict);

    Ok(Json(OriginalityResponse {
        score: verdict.score,
        is_blocked,
        match_text: verdict.matched_text,
        candidates_found,
    }))
}

/// Responds with the matched catalog line, or `null`.
#[instrument(skip(state, request), fields(text_len = request.scene_text.len()))]
pub async fn match_scene_handler<O>(
    State(state): State<HandlerState<O>>,
    Json(request): Json<SceneRequest>,
) -> Result<Json<Option<EnrichedMatch>>, GatewayError>
where
    O: OverviewSource + Clone + Send + Sync + 'static,
{
    let matcher = Arc::clone(&state.matcher);
    let matched = tokio::task::spawn_blocking(move || {
        matcher.find_matching_scene(&request.scene_text)
    })
    .await??;

    if let Some(ref m) = matched {
        info!(film = m.record.film, match_score = m.match_score, "Scene matched");
    }

    Ok(Json(matched))
}

#[instrument(skip(request), fields(text_len = request.scene_text.len()))]
pub async fn generate_storyboard_handler(Json(request): Json<SceneRequest>) -> Json<Storyboard> {
    Json(generate_storyboard(&request.scene_text))
}

#[instrument(skip(request), fields(text_len = request.scene_text.len()))]
pub async fn generate_video_handler(Json(request): Json<SceneRequest>) -> Json<VideoClip> {
    Json(generate_video(&request.scene_text))
}

#[instrument(skip(request), fields(title = %request.title))]
pub async fn generate_query_handler(
    Json(request): Json<SynopsisRequest>,
) -> Json<QueryLetterResponse> {
    Json(QueryLetterResponse {
        letter: generate_query_letter(&request.synopsis, &request.title),
    })
}

#[instrument(skip(request), fields(text_len = request.scene_text.len()))]
pub async fn analyze_script_handler(
    Json(request): Json<SceneRequest>,
) -> Result<Json<ScriptStats>, GatewayError> {
    let stats = tokio::task::spawn_blocking(move || analyze_script(&request.scene_text)).await?;
    Ok(Json(stats))
}
