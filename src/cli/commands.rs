//! CLI command implementations
//!
//! Boot order: config → seed → runtime → serve.

use crate::http_server::{HttpServer, ServerConfig};
use crate::movies::MovieStore;
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the server
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    serve(cli.into_config())
}

/// Load the seed and serve until shutdown
pub fn serve(config: ServerConfig) -> CliResult<()> {
    log_event(Event::BootStart);

    let port = config.port.to_string();
    let origins = config.cors_origins.len().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("cors_origins", &origins), ("host", &config.host), ("port", &port)],
    );

    let store = load_store(&config)?;

    let server = HttpServer::new(config, store);

    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    rt.block_on(server.start()).map_err(CliError::Server)
}

/// Build the initial store from the configured seed source
pub fn load_store(config: &ServerConfig) -> CliResult<MovieStore> {
    let (store, source) = match &config.seed_path {
        Some(path) => (
            MovieStore::from_seed_file(path)?,
            path.display().to_string(),
        ),
        None => (MovieStore::from_default_seed()?, "embedded".to_string()),
    };

    let count = store.len().to_string();
    log_event_with_fields(Event::SeedLoaded, &[("movies", &count), ("source", &source)]);

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_store_embedded() {
        let store = load_store(&ServerConfig::default()).unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn test_load_store_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let config = ServerConfig {
            seed_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(load_store(&config).unwrap().is_empty());
    }

    #[test]
    fn test_load_store_bad_seed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let config = ServerConfig {
            seed_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = load_store(&config).unwrap_err();
        assert_eq!(err.code(), "MOVIES_CLI_SEED_ERROR");
    }
}
