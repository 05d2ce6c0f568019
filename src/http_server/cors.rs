//! CORS gate
//!
//! Requests without an `Origin` header always pass. Requests whose origin is
//! not on the allow-list are answered with 403 before any route runs.
//! Allowed cross-origin requests get their CORS headers from tower-http.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::observability::{log_event_with_fields, Event};

use super::errors::ApiError;

/// Exact-match origin allow-list.
#[derive(Debug, Clone)]
pub struct CorsGate {
    allowed: Arc<HashSet<String>>,
}

impl CorsGate {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: Arc::new(origins.into_iter().map(Into::into).collect()),
        }
    }

    /// Decides whether a request declaring `origin` may proceed.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed.contains(origin),
        }
    }

    /// Layer emitting `Access-Control-*` headers for allowed origins.
    pub fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers(AllowHeaders::mirror_request())
    }
}

/// Middleware rejecting requests from origins off the allow-list.
pub async fn enforce_origin(
    State(gate): State<CorsGate>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // A header that is not valid UTF-8 can never match the list.
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .map(|v| v.to_str().unwrap_or_default());

    if !gate.is_allowed(origin) {
        let origin = origin.unwrap_or_default().to_string();
        let path = request.uri().path().to_string();
        log_event_with_fields(Event::CorsRejected, &[("origin", &origin), ("path", &path)]);
        return Err(ApiError::CorsRejected);
    }

    Ok(next.run(request).await)
}
