//! Configuration management for the service
//!
//! This module handles loading and validation of all service configuration,
//! either from a YAML file or from environment variables (with `.env`
//! support at startup).

pub mod models;

pub use models::*;

use crate::utils::error::{PlatformError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Email delivery configuration
    #[serde(default)]
    pub email: EmailConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PlatformError::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PlatformError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let server = ServerConfig {
            host: env_or("HOST", models::default_host()),
            port: parse_env("PORT", models::default_port())?,
            workers: None,
        };

        let storage = StorageConfig {
            database: DatabaseConfig {
                url: env_or("DATABASE_URL", String::new()),
                ..DatabaseConfig::default()
            },
        };

        let auth = AuthConfig {
            jwt_secret: env_or("JWT_SECRET", String::new()),
        };

        let email = EmailConfig {
            from_address: env_or("EMAIL_FROM", String::new()),
            smtp_host: env_or("SMTP_HOST", String::new()),
            smtp_port: parse_env("SMTP_PORT", models::default_smtp_port())?,
            smtp_username: env_or("SMTP_USER", String::new()),
            smtp_password: env_or("SMTP_PASS", String::new()),
        };

        let config = Self {
            server,
            storage,
            auth,
            email,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| PlatformError::config(format!("Server config error: {}", e)))?;

        self.storage
            .database
            .validate()
            .map_err(|e| PlatformError::config(format!("Database config error: {}", e)))?;

        self.auth
            .validate()
            .map_err(|e| PlatformError::config(format!("Auth config error: {}", e)))?;

        self.email
            .validate()
            .map_err(|e| PlatformError::config(format!("Email config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}

fn env_or(key: &str, default: String) -> String {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default,
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value
            .parse()
            .map_err(|_| PlatformError::config(format!("Invalid value for {}", key))),
        _ => Ok(default),
    }
}
