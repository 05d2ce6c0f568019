//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::movies::SeedError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Seed document could not be loaded
    #[error("MOVIES_CLI_SEED_ERROR: {0}")]
    Seed(#[from] SeedError),

    /// Tokio runtime could not be created
    #[error("MOVIES_CLI_RUNTIME_ERROR: failed to create tokio runtime: {0}")]
    Runtime(#[source] io::Error),

    /// Listener bind or serve loop failed
    #[error("MOVIES_CLI_SERVER_ERROR: HTTP server failed: {0}")]
    Server(#[source] io::Error),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Seed(_) => "MOVIES_CLI_SEED_ERROR",
            CliError::Runtime(_) => "MOVIES_CLI_RUNTIME_ERROR",
            CliError::Server(_) => "MOVIES_CLI_SERVER_ERROR",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code() {
        let err = CliError::Seed(SeedError::NotAnArray);
        assert_eq!(err.code(), "MOVIES_CLI_SEED_ERROR");
        assert!(err.to_string().starts_with("MOVIES_CLI_SEED_ERROR: "));

        let err = CliError::Server(io::Error::new(io::ErrorKind::AddrInUse, "in use"));
        assert!(err.to_string().contains("in use"));
    }
}
