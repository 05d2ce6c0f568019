//! CLI argument definitions using clap
//!
//! - movies-api [--port <port>] [--host <host>] [--seed <path>] [--allow-origin <origin>]...

use clap::Parser;
use std::path::PathBuf;

use crate::http_server::{ServerConfig, DEFAULT_PORT};

/// Movies API - an in-memory movies REST service
#[derive(Parser, Debug)]
#[command(name = "movies-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Seed file with the initial movies (defaults to the embedded seed)
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Origin allowed by the CORS gate; repeat to allow several.
    /// Replaces the default allow-list when given.
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    pub allow_origins: Vec<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Server configuration described by these arguments
    pub fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            host: self.host,
            port: self.port,
            cors_origins: if self.allow_origins.is_empty() {
                defaults.cors_origins
            } else {
                self.allow_origins
            },
            seed_path: self.seed,
        }
    }
}
