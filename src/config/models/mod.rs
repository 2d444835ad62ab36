//! Configuration data models
//!
//! This module defines all configuration structures used throughout the
//! service.

pub mod auth;
pub mod email;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use auth::*;
pub use email::*;
pub use server::*;
pub use storage::*;

/// Default server host
pub fn default_host() -> String {
    "localhost".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    4130
}

/// Default database connection pool size
pub fn default_max_connections() -> u32 {
    10
}

/// Default database connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    10
}

/// Default SMTP submission port
pub fn default_smtp_port() -> u16 {
    587
}
