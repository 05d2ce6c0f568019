//! Movie HTTP Routes
//!
//! `/` greeting plus CRUD over `/movies`.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::movies::{validate_full, validate_partial, Movie, MovieStore, ValidationErrors};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Movie store shared across handlers
pub struct MoviesState {
    store: RwLock<MovieStore>,
}

impl MoviesState {
    pub fn new(store: MovieStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    fn read(&self) -> ApiResult<RwLockReadGuard<'_, MovieStore>> {
        self.store
            .read()
            .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, MovieStore>> {
        self.store
            .write()
            .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Default, PartialEq)]
pub struct ListQuery {
    pub genre: Option<String>,
}

impl ListQuery {
    /// The first `genre` wins when the parameter repeats.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let genre = pairs
            .into_iter()
            .find(|(key, _)| key == "genre")
            .map(|(_, value)| value);
        Self { genre }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn json(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

// ==================
// Movie Routes
// ==================

/// Create movie routes
pub fn movie_routes(state: Arc<MoviesState>) -> Router {
    Router::new()
        .route("/", get(greeting_handler))
        .route("/movies", get(list_movies_handler).post(create_movie_handler))
        .route(
            "/movies/:id",
            get(get_movie_handler)
                .patch(update_movie_handler)
                .delete(delete_movie_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn json_body(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))
}

/// PATCH body: empty means `{}`, anything else must be JSON.
fn patch_body(headers: &HeaderMap, body: &Bytes) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    if !is_json_content_type(headers) {
        return Err(ApiError::InvalidBody(
            "Expected request with `Content-Type: application/json`".to_string(),
        ));
    }
    Json::<Value>::from_bytes(body)
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn rejected(op: &str, errors: ValidationErrors) -> ApiError {
    let count = errors.len().to_string();
    log_event_with_fields(Event::ValidationRejected, &[("errors", &count), ("op", op)]);
    ApiError::Validation(errors)
}

// ==================
// Handlers
// ==================

async fn greeting_handler() -> Json<MessageResponse> {
    MessageResponse::json("Hola mundo")
}

async fn list_movies_handler(
    State(state): State<Arc<MoviesState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<Movie>>> {
    // An unreadable query string lists everything.
    let query = query
        .map(|Query(pairs)| ListQuery::from_pairs(pairs))
        .unwrap_or_default();
    let store = state.read()?;
    // An empty `?genre=` filters nothing.
    let genre = query.genre.as_deref().filter(|g| !g.is_empty());
    Ok(Json(store.list(genre)))
}

async fn get_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let store = state.read()?;
    let movie = store.get(&id).map_err(|_| ApiError::LookupNotFound)?;
    Ok(Json(movie.clone()))
}

async fn create_movie_handler(
    State(state): State<Arc<MoviesState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let payload = json_body(payload)?;
    let data = validate_full(&payload).map_err(|e| rejected("create", e))?;

    let movie = state.write()?.create(data);
    log_event_with_fields(Event::MovieCreated, &[("id", &movie.id)]);

    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Movie>> {
    let payload = patch_body(&headers, &body)?;
    let patch = validate_partial(&payload).map_err(|e| rejected("update", e))?;

    let movie = state
        .write()?
        .update(&id, patch)
        .map_err(ApiError::from_store)?;
    log_event_with_fields(Event::MovieUpdated, &[("id", &movie.id)]);

    Ok(Json(movie))
}

async fn delete_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = state.write()?.delete(&id).map_err(ApiError::from_store)?;
    log_event_with_fields(Event::MovieDeleted, &[("id", &removed.id)]);

    Ok(MessageResponse::json("Movie deleted"))
}
