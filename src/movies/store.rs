//! In-memory movie store
//!
//! An ordered `Vec<Movie>`; insertion order is preserved across create and
//! delete. Inputs are expected to have already passed validation, so the
//! write operations never reject a payload. Only unknown ids fail.

use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::types::{Movie, MoviePatch, NewMovie};

/// The record store
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `movies` in the given order.
    ///
    /// Callers are responsible for id uniqueness; the seed loader checks it.
    pub(crate) fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Lists movies, optionally restricted to a genre (case-insensitive).
    pub fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        match genre {
            Some(name) => self
                .movies
                .iter()
                .filter(|m| m.has_genre(name))
                .cloned()
                .collect(),
            None => self.movies.clone(),
        }
    }

    /// Looks up a movie by exact id.
    pub fn get(&self, id: &str) -> StoreResult<&Movie> {
        self.movies
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Appends a new movie under a freshly generated id.
    pub fn create(&mut self, data: NewMovie) -> Movie {
        let id = self.fresh_id();
        let movie = Movie::from_new(id, data);
        self.movies.push(movie.clone());
        movie
    }

    /// Applies a partial update in place and returns the new record.
    pub fn update(&mut self, id: &str, patch: MoviePatch) -> StoreResult<Movie> {
        let index = self.position(id)?;
        let updated = self.movies[index].patched(patch);
        self.movies[index] = updated.clone();
        Ok(updated)
    }

    /// Removes a movie, keeping the order of the rest. Returns the removed record.
    pub fn delete(&mut self, id: &str) -> StoreResult<Movie> {
        let index = self.position(id)?;
        Ok(self.movies.remove(index))
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.movies
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn fresh_id(&self) -> String {
        // Unique even on a v4 collision.
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_err() {
                return id;
            }
        }
    }
}
