//! # HTTP Server
//!
//! Combines the routers with the CORS gate and request logging, and runs
//! them on a tokio listener.

use std::io;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;

use crate::movies::MovieStore;
use crate::observability::{log_event, log_event_with_fields, Event};

use super::config::ServerConfig;
use super::errors::ApiError;
use super::cors::{enforce_origin, CorsGate};
use super::movie_routes::{movie_routes, MoviesState};
use super::observability_routes::health_routes;
use super::request_log::log_requests;

/// HTTP server for the movies API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server owning `store`.
    pub fn new(config: ServerConfig, store: MovieStore) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C.
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?.to_string();
        let url = format!("http://localhost:{}", self.config.port);
        log_event_with_fields(Event::ServerListening, &[("addr", &addr), ("url", &url)]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerStopped);
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &ServerConfig, store: MovieStore) -> Router {
    let state = Arc::new(MoviesState::new(store));
    let gate = CorsGate::new(config.cors_origins.iter().cloned());

    Router::new()
        .merge(movie_routes(state))
        .merge(health_routes())
        .fallback(route_not_found)
        .layer(gate.cors_layer())
        // Runs before the CORS layer so rejected origins never reach a route.
        .layer(middleware::from_fn_with_state(gate, enforce_origin))
        .layer(middleware::from_fn(log_requests))
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn shutdown_signal() {
    // Without a Ctrl-C handler the server runs until killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(ServerConfig::default(), MovieStore::new());
        assert_eq!(server.socket_addr(), "0.0.0.0:1234");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(ServerConfig::with_port(8080), MovieStore::new());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(ServerConfig::default(), MovieStore::new());
        let _router = server.router();
    }
}
