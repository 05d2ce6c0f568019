//! Movie records, validation and the in-memory store
//!
//! # Design
//!
//! - Payloads are validated before they reach the store
//! - The store only ever receives normalized `NewMovie` / `MoviePatch` values
//! - Validation reports every failing field
//! - The store is an owned value; callers decide how to share it

mod errors;
mod seed;
mod store;
mod types;
mod validator;

pub use errors::{FieldError, SeedError, StoreError, StoreResult, ValidationErrors};
pub use seed::DEFAULT_SEED;
pub use store::MovieStore;
pub use types::{Genre, Movie, MoviePatch, NewMovie, DEFAULT_RATE};
pub use validator::{validate_full, validate_partial, MAX_RATE, MAX_YEAR, MIN_RATE, MIN_YEAR};
