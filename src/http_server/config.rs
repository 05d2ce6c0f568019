//! HTTP Server Configuration
//!
//! Host, port, CORS allow-list and seed source.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 1234;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 1234)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Exact origins the CORS gate lets through
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Seed file; the embedded seed is used when unset
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Origins accepted out of the box.
pub fn default_cors_origins() -> Vec<String> {
    [
        "http://localhost:8080",
        "http://192.168.1.40:8080",
        "http://localhost:8888",
        "http://localhost:1234",
        "http://localhost:1111",
        "http://movies.com",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            seed_path: None,
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 1234);
        assert!(config.cors_origins.contains(&"http://movies.com".to_string()));
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_serde_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origins, default_cors_origins());
    }
}
