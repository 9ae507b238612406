use serde::Serialize;

use crate::scoring::MatchCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// A famous line and where it comes from.
pub struct SceneRecord {
    pub film: &'static str,
    pub year: u16,
    pub director: &'static str,
    pub runtime: &'static str,
    pub language: &'static str,
    /// Position of the line in the film, `HH:MM:SS`.
    pub scene_timestamp: &'static str,
    /// The quoted line.
    pub text: &'static str,
}

impl MatchCandidate for SceneRecord {
    fn comparable_text(&self) -> Option<&str> {
        Some(self.text)
    }
}

/// Built-in catalog of famous lines.
pub static SCENE_CATALOG: &[SceneRecord] = &[
    SceneRecord {
        film: "The Godfather",
        year: 1972,
        director: "Francis Ford Coppola",
        runtime: "2h 55m",
        language: "English",
        scene_timestamp: "00:28:15",
        text: "I'm going to make him an offer he can't refuse. One day, and this day may never come, I will call upon you to do a service for me.",
    },
    SceneRecord {
        film: "Taxi Driver",
        year: 1976,
        director: "Martin Scorsese",
        runtime: "1h 54m",
        language: "English",
        scene_timestamp: "00:35:40",
        text: "You talkin' to me? You talkin' to me? Then who the hell else are you talkin' to? You talkin' to me? Well, I'm the only one here.",
    },
    SceneRecord {
        film: "Pulp Fiction",
        year: 1994,
        director: "Quentin Tarantino",
        runtime: "2h 34m",
        language: "English",
        scene_timestamp: "00:18:22",
        text: "The path of the righteous man is beset on all sides by the inequities of the selfish and the tyranny of evil men. Blessed is he who, in the name of charity and good will, shepherds the weak through the valley of the darkness.",
    },
    SceneRecord {
        film: "The Dark Knight",
        year: 2008,
        director: "Christopher Nolan",
        runtime: "2h 32m",
        language: "English",
        scene_timestamp: "00:05:10",
        text: "I believe whatever doesn't kill you, simply makes you... stranger.",
    },
    SceneRecord {
        film: "Fight Club",
        year: 1999,
        director: "David Fincher",
        runtime: "2h 19m",
        language: "English",
        scene_timestamp: "01:12:05",
        text: "The first rule of Fight Club is: You do not talk about Fight Club. The second rule of Fight Club is: You do not talk about Fight Club.",
    },
    SceneRecord {
        film: "Casablanca",
        year: 1942,
        director: "Michael Curtiz",
        runtime: "1h 42m",
        language: "English",
        scene_timestamp: "01:38:55",
        text: "Here's looking at you, kid.",
    },
    SceneRecord {
        film: "Star Wars: Episode V - The Empire Strikes Back",
        year: 1980,
        director: "Irvin Kershner",
        runtime: "2h 4m",
        language: "English",
        scene_timestamp: "01:51:30",
        text: "No. I am your father. That's not true. That's impossible! Search your feelings, you know it to be true.",
    },
    SceneRecord {
        film: "La La Land",
        year: 2016,
        director: "Damien Chazelle",
        runtime: "2h 8m",
        language: "English",
        scene_timestamp: "01:05:22",
        text: "City of stars, are you shining just for me? City of stars, there's so much that I can't see.",
    },
];

/// Looks a record up by film title (exact match).
pub fn find_by_film(film: &str) -> Option<&'static SceneRecord> {
    SCENE_CATALOG.iter().find(|r| r.film == film)
}
