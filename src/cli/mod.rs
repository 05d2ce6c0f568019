//! CLI module for the movies service
//!
//! Parses arguments, loads the seed and runs the HTTP server.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{load_store, run, serve};
pub use errors::{CliError, CliResult};
