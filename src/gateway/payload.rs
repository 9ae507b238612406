use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynopsisRequest {
    pub title: String,
    pub synopsis: String,
}

/// Body shared by the scene endpoints. `analyze-script` sends the full script here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneRequest {
    pub scene_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalityResponse {
    pub score: f32,
    pub is_blocked: bool,
    pub match_text: String,
    pub candidates_found: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLetterResponse {
    pub letter: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub message: &'static str,
}
