//! # HTTP Server Module
//!
//! Axum server exposing the movie store.
//!
//! # Endpoints
//!
//! - `/` - Greeting
//! - `/movies` - List (`?genre=`) and create
//! - `/movies/:id` - Get, partial update, delete
//! - `/health` - Health check

pub mod config;
pub mod cors;
pub mod errors;
pub mod movie_routes;
pub mod observability_routes;
pub mod request_log;
pub mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use cors::CorsGate;
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
