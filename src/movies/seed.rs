//! Seed loading for the movie store
//!
//! The store is populated once at startup from a JSON array of movies. Each
//! entry keeps its own `id` and must pass full validation; duplicate ids
//! abort loading. Nothing is ever written back.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use super::errors::SeedError;
use super::store::MovieStore;
use super::types::Movie;
use super::validator::validate_full;

/// Seed document compiled into the binary.
pub const DEFAULT_SEED: &str = include_str!("../../data/movies.json");

impl MovieStore {
    /// Builds a store from the embedded seed document.
    pub fn from_default_seed() -> Result<Self, SeedError> {
        Self::from_seed_str(DEFAULT_SEED)
    }

    /// Builds a store from a seed file on disk.
    pub fn from_seed_file(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_seed_str(&content)
    }

    /// Builds a store from a seed document.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, a non-array root, an entry without a string
    /// `id`, a repeated id, or an entry that fails full validation.
    pub fn from_seed_str(json: &str) -> Result<Self, SeedError> {
        let root: Value = serde_json::from_str(json)?;
        let entries = root.as_array().ok_or(SeedError::NotAnArray)?;

        let mut seen = HashSet::with_capacity(entries.len());
        let mut movies = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let id = entry
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .ok_or(SeedError::MissingId { index })?;

            if !seen.insert(id.to_string()) {
                return Err(SeedError::DuplicateId {
                    index,
                    id: id.to_string(),
                });
            }

            let data = validate_full(entry).map_err(|errors| SeedError::Invalid { index, errors })?;
            movies.push(Movie::from_new(id, data));
        }

        Ok(MovieStore::from_movies(movies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_seed_loads() {
        let store = MovieStore::from_default_seed().unwrap();
        assert!(!store.is_empty());
        assert!(store.get("5ad1a235-0d9c-410a-b32b-220d91689a08").is_ok());
    }

    #[test]
    fn test_empty_seed_gives_empty_store() {
        let store = MovieStore::from_seed_str("[]").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_seed_ids_are_kept() {
        let seed = r#"[{"id": "fixed-1", "title": "Heat", "year": 1995, "director": "Michael Mann",
            "duration": 170, "poster": "https://x.io/heat.jpg", "genre": ["Crime"]}]"#;
        let store = MovieStore::from_seed_str(seed).unwrap();
        let movie = store.get("fixed-1").unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.rate, 5.0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let entry = r#"{"id": "dup", "title": "Heat", "year": 1995, "director": "Michael Mann",
            "duration": 170, "poster": "https://x.io/heat.jpg", "genre": ["Crime"]}"#;
        let seed = format!("[{},{}]", entry, entry);
        let err = MovieStore::from_seed_str(&seed).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId { index: 1, .. }));
    }

    #[test]
    fn test_invalid_entry_rejected() {
        let seed = r#"[{"id": "x", "title": "Heat"}]"#;
        let err = MovieStore::from_seed_str(seed).unwrap_err();
        match err {
            SeedError::Invalid { index, errors } => {
                assert_eq!(index, 0);
                assert!(errors.has_field("year"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_id_and_bad_root() {
        assert!(matches!(
            MovieStore::from_seed_str(r#"[{"title": "Heat"}]"#),
            Err(SeedError::MissingId { index: 0 })
        ));
        assert!(matches!(
            MovieStore::from_seed_str(r#"{"movies": []}"#),
            Err(SeedError::NotAnArray)
        ));
        assert!(matches!(
            MovieStore::from_seed_str("not json"),
            Err(SeedError::Json(_))
        ));
    }

    #[test]
    fn test_seed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DEFAULT_SEED.as_bytes()).unwrap();

        let store = MovieStore::from_seed_file(file.path()).unwrap();
        assert_eq!(store.len(), MovieStore::from_default_seed().unwrap().len());
    }

    #[test]
    fn test_missing_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MovieStore::from_seed_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SeedError::Read { .. }));
    }
}
