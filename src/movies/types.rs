//! Movie record types
//!
//! `Movie` is what the store holds and what the API returns. `NewMovie` and
//! `MoviePatch` are the normalized outputs of full and partial validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rating applied when a create payload carries no `rate`.
pub const DEFAULT_RATE: f64 = 5.0;

/// Genres a movie may be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Crime,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    /// Every genre, in declaration order.
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Crime,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
    ];

    /// Returns the wire name of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Crime => "Crime",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Exact (case-sensitive) lookup by wire name.
    pub fn from_name(name: &str) -> Option<Genre> {
        Self::ALL.iter().copied().find(|g| g.as_str() == name)
    }

    /// Case-insensitive comparison against a filter string.
    pub fn matches_ignore_case(&self, name: &str) -> bool {
        self.as_str().to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl Movie {
    /// Builds a record from validated fields and an id.
    pub fn from_new(id: impl Into<String>, data: NewMovie) -> Self {
        Self {
            id: id.into(),
            title: data.title,
            year: data.year,
            director: data.director,
            duration: data.duration,
            rate: data.rate,
            poster: data.poster,
            genre: data.genre,
        }
    }

    /// Returns a copy with every field present in `patch` overwritten.
    pub fn patched(&self, patch: MoviePatch) -> Self {
        Self {
            id: self.id.clone(),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            year: patch.year.unwrap_or(self.year),
            director: patch.director.unwrap_or_else(|| self.director.clone()),
            duration: patch.duration.unwrap_or(self.duration),
            rate: patch.rate.unwrap_or(self.rate),
            poster: patch.poster.unwrap_or_else(|| self.poster.clone()),
            genre: patch.genre.unwrap_or_else(|| self.genre.clone()),
        }
    }

    /// True if any of the movie's genres matches `name`, ignoring case.
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|g| g.matches_ignore_case(name))
    }
}

/// Fields of a movie that passed full validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// Fields supplied in a partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    /// True if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie {
            id: "m1".into(),
            title: "Inception".into(),
            year: 2010,
            director: "Christopher Nolan".into(),
            duration: 148,
            rate: 8.8,
            poster: "https://example.com/inception.jpg".into(),
            genre: vec![Genre::Action, Genre::SciFi],
        }
    }

    #[test]
    fn test_genre_wire_names() {
        assert_eq!(serde_json::to_string(&Genre::SciFi).unwrap(), "\"Sci-Fi\"");
        assert_eq!(Genre::from_name("Sci-Fi"), Some(Genre::SciFi));
        assert_eq!(Genre::from_name("sci-fi"), None);
    }

    #[test]
    fn test_has_genre_ignores_case() {
        let movie = sample();
        assert!(movie.has_genre("sci-fi"));
        assert!(movie.has_genre("ACTION"));
        assert!(!movie.has_genre("Drama"));
    }

    #[test]
    fn test_patched_only_touches_present_fields() {
        let movie = sample();
        let patch = MoviePatch {
            year: Some(2011),
            ..Default::default()
        };

        let updated = movie.patched(patch);
        assert_eq!(updated.year, 2011);
        assert_eq!(updated.title, movie.title);
        assert_eq!(updated.genre, movie.genre);
        assert_eq!(updated.id, movie.id);
    }

    #[test]
    fn test_empty_patch() {
        assert!(MoviePatch::default().is_empty());
        let patch = MoviePatch {
            rate: Some(1.0),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
