//! Screenplay statistics for the completion certificate.
//!
//! Everything here is a text heuristic over standard screenplay formatting: scene headings
//! (`INT.`/`EXT.`), capitalised character cues and a words-per-page estimate.


use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::hashing::hash_to_index;

/// Industry rule of thumb for a formatted screenplay page.
pub const WORDS_PER_PAGE: f64 = 250.0;
pub const LOCATION_PREVIEW_LEN: usize = 5;
pub const MAX_CHARACTER_NAME_CHARS: usize = 40;
/// Below this many markets one surprise market is added.
pub const MIN_MARKETS: usize = 3;

pub const DEFAULT_MARKETS: [&str; 2] = ["USA", "Global Streaming"];

pub const EXCLUDED_CUES: [&str; 7] = [
    "CUT TO:",
    "FADE IN:",
    "FADE OUT:",
    "THE END",
    "TRANSITION:",
    "BLACK.",
    "CONTINUED:",
];

/// City keyword (matched against upper-cased locations) to market.
pub const CITY_MARKETS: [(&str, &str); 10] = [
    ("PARIS", "France"),
    ("LONDON", "United Kingdom"),
    ("TOKYO", "Japan"),
    ("NEW YORK", "USA"),
    ("LOS ANGELES", "USA"),
    ("BERLIN", "Germany"),
    ("MUMBAI", "India"),
    ("SEOUL", "South Korea"),
    ("ROME", "Italy"),
    ("RIO", "Brazil"),
];

pub const SURPRISE_MARKETS: [&str; 6] = [
    "Japan",
    "South Korea",
    "Brazil",
    "Australia",
    "Canada",
    "France",
];

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*(?:INT\./EXT\.|INT\.|EXT\.)\s+(.+?)(?:\s-\s|$)")
        .expect("location pattern is valid")
});

static CHARACTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([A-Z][A-Z0-9\s()]+?)\s*$").expect("character pattern is valid")
});

static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)").expect("parenthetical pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptStats {
    pub page_count: u32,
    pub location_count: usize,
    pub character_count: usize,
    pub languages: Vec<String>,
    /// Sorted.
    pub potential_markets: Vec<String>,
    /// First few locations in order of appearance.
    pub locations_preview: Vec<String>,
}

pub fn analyze_script(script_text: &str) -> ScriptStats {
    let locations = extract_locations(script_text);
    let characters = extract_characters(script_text);
    let page_count = estimate_pages(script_text);

    debug!(
        page_count,
        locations = locations.len(),
        characters = characters.len(),
        "Analyzed script"
    );

    ScriptStats {
        page_count,
        location_count: locations.len(),
        character_count: characters.len(),
        languages: detect_languages(script_text),
        potential_markets: potential_markets(script_text, &locations),
        locations_preview: locations.iter().take(LOCATION_PREVIEW_LEN).cloned().collect(),
    }
}

/// `max(1, round(words / 250))`, halves rounded to even.
pub fn estimate_pages(script_text: &str) -> u32 {
    let words = script_text.split_whitespace().count() as f64;
    ((words / WORDS_PER_PAGE).round_ties_even() as u32).max(1)
}

/// Unique scene-heading locations in first-seen order.
pub fn extract_locations(script_text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    LOCATION_RE
        .captures_iter(script_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|loc| !loc.is_empty() && seen.insert(loc.clone()))
        .collect()
}

/// Unique character cues with parentheticals such as `(V.O.)` removed.
pub fn extract_characters(script_text: &str) -> BTreeSet<String> {
    CHARACTER_RE
        .captures_iter(script_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|cue| {
            !cue.is_empty()
                && !EXCLUDED_CUES.contains(cue)
                && !cue.contains("INT.")
                && !cue.contains("EXT.")
                && cue.chars().count() < MAX_CHARACTER_NAME_CHARS
        })
        .map(|cue| PARENTHETICAL_RE.replace_all(cue, "").trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// English always; Spanish and French when the script mentions them.
pub fn detect_languages(script_text: &str) -> Vec<String> {
    let mut languages = vec!["English".to_string()];
    for language in ["Spanish", "French"] {
        if script_text.contains(language) {
            languages.push(language.to_string());
        }
    }
    languages
}

/// Markets suggested by the script's locations, padded with one surprise pick.
///
/// The surprise pick is derived from a hash of the script, so the same script always gets
/// the same market.
pub fn potential_markets(script_text: &str, locations: &[String]) -> Vec<String> {
    let mut markets: BTreeSet<&str> = DEFAULT_MARKETS.into_iter().collect();

    for location in locations {
        let upper = location.to_uppercase();
        for (city, market) in CITY_MARKETS {
            if upper.contains(city) {
                markets.insert(market);
            }
        }
    }

    if markets.len() < MIN_MARKETS {
        let pick = hash_to_index(script_text.as_bytes(), SURPRISE_MARKETS.len());
        markets.insert(SURPRISE_MARKETS[pick]);
    }

    markets.into_iter().map(str::to_string).collect()
}
