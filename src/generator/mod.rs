//! Placeholder generators for storyboard art, animatics and query letters.
//!
//! Storyboard and video generation return fixed placeholder media so the front end can be
//! exercised without an image or video backend.


use serde::Serialize;

pub const STORYBOARD_PLACEHOLDER_URL: &str =
    "https://placehold.co/600x400/EEE/31343C?text=Sketch+Storyboard";
pub const VIDEO_PLACEHOLDER_URL: &str = "https://www.w3schools.com/html/mov_bbb.mp4";
pub const VIDEO_STYLE: &str = "black and white stickman";

const PROMPT_PREVIEW_CHARS: usize = 50;
const LOGLINE_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Storyboard {
    pub image_url: String,
    pub prompt_used: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoClip {
    pub video_url: String,
    pub style: String,
}

/// Returns the first `max_chars` characters of `text` without splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn generate_storyboard(scene_text: &str) -> Storyboard {
    Storyboard {
        image_url: STORYBOARD_PLACEHOLDER_URL.to_string(),
        prompt_used: format!(
            "Sketch style storyboard for: {}...",
            truncate_chars(scene_text, PROMPT_PREVIEW_CHARS)
        ),
    }
}

pub fn generate_video(_scene_text: &str) -> VideoClip {
    VideoClip {
        video_url: VIDEO_PLACEHOLDER_URL.to_string(),
        style: VIDEO_STYLE.to_string(),
    }
}

/// Drafts an agent query letter. The logline is the opening of the synopsis.
pub fn generate_query_letter(synopsis: &str, title: &str) -> String {
    let logline = truncate_chars(synopsis, LOGLINE_CHARS);
    format!(
        "\nDear Agent,\n\n\
         I am seeking representation for my new project, {title}.\n\n\
         LOGLINE: {logline}...\n\n\
         {synopsis}\n\n\
         This project is a high-concept thriller with a unique twist.\n\
         I believe it would be a great fit for your roster.\n\n\
         Sincerely,\n\
         [Writer Name]\n",
        title = title.to_uppercase(),
    )
}
