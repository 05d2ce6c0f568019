//! # HTTP API Errors
//!
//! Every failure on the request path ends up here and is rendered as a JSON
//! body with a status code. None of them terminate the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::movies::{FieldError, StoreError, ValidationErrors};

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Payload failed movie validation
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// Body missing or not JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// `GET /movies/:id` miss
    #[error("movie not found")]
    LookupNotFound,

    /// Update/delete miss
    #[error("Movie not found")]
    MovieNotFound,

    /// No route matches the path
    #[error("Route not found")]
    RouteNotFound,

    /// Origin not on the allow-list
    #[error("Not allowed CORS")]
    CorsRejected,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store lock poisoned by a panicking handler
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::LookupNotFound => StatusCode::NOT_FOUND,
            ApiError::MovieNotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::CorsRejected => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a store miss on update/delete.
    pub fn from_store(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::MovieNotFound,
        }
    }

    /// JSON body for this error.
    ///
    /// Validation failures carry `{"error": [...]}`, everything else
    /// `{"message": "..."}`.
    pub fn body(&self) -> serde_json::Value {
        match self {
            ApiError::Validation(errors) => json!({ "error": errors }),
            ApiError::InvalidBody(reason) => {
                json!({ "error": [FieldError::new("$body", reason.clone())] })
            }
            other => json!({ "message": other.to_string() }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::from(ValidationErrors::single(FieldError::missing_field("title")));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::LookupNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::MovieNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::CorsRejected.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(ApiError::LookupNotFound.body()["message"], "movie not found");
        assert_eq!(ApiError::MovieNotFound.body()["message"], "Movie not found");
        assert_eq!(
            ApiError::from_store(StoreError::NotFound("id".into())).body()["message"],
            "Movie not found"
        );
        assert_eq!(ApiError::RouteNotFound.body()["message"], "Route not found");
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let err = ApiError::from(ValidationErrors::single(FieldError::missing_field("title")));
        let body = err.body();
        assert_eq!(body["error"][0]["field"], "title");
    }

    #[test]
    fn test_invalid_body_uses_error_list() {
        let body = ApiError::InvalidBody("EOF while parsing".into()).body();
        assert_eq!(body["error"][0]["field"], "$body");
    }
}
