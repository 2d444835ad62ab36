//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{PlatformError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| PlatformError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
///
/// Loads `config/unibook.yaml` when present, otherwise reads the
/// environment. Missing required settings (database URL, JWT secret) are
/// fatal here, before any request is served.
pub async fn run_server() -> Result<()> {
    info!("Starting Unibook authentication backend");

    let config_path = "config/unibook.yaml";
    let config = if std::path::Path::new(config_path).exists() {
        info!("Loading configuration file: {}", config_path);
        Config::from_file(config_path).await?
    } else {
        Config::from_env()?
    };

    let server = HttpServer::new(&config).await?;
    info!("Server starting at: http://{}", config.server.address());

    server.start().await
}
