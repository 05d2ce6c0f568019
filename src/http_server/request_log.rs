//! Request logging middleware

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::{log_event_with_fields, Event};

/// Emits one `REQUEST_COMPLETE` line per request, rejected ones included.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let latency_ms = started.elapsed().as_millis().to_string();
    log_event_with_fields(
        Event::RequestComplete,
        &[
            ("latency_ms", &latency_ms),
            ("method", &method),
            ("path", &path),
            ("status", &status),
        ],
    );

    response
}
