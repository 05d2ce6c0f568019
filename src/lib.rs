//! movies-api - an in-memory movies REST service
//!
//! - `movies`: record types, validation, the store and its seed
//! - `http_server`: axum routes, CORS gate, server
//! - `observability`: structured JSON logging
//! - `cli`: argument parsing and boot

pub mod cli;
pub mod http_server;
pub mod movies;
pub mod observability;
