//! Error types for the platform

use thiserror::Error;

/// Result type alias for the platform
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Main error type for the platform
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or missing input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate identity on account creation
    #[error("Conflict: {0}")]
    Conflict(String),

    /// OTP absent, already consumed, or past its expiry window
    #[error("Invalid OTP or request has expired")]
    InvalidOrExpiredOtp,

    /// OTP hash comparison failed
    #[error("Invalid OTP")]
    InvalidOtp,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account exists but its email was never verified
    #[error("account {email} is not verified")]
    NotVerified {
        /// Email surfaced so a client can drive the resend flow
        email: String,
    },

    /// Account verified but still awaiting college-admin approval
    #[error("account is pending approval from the college admin")]
    PendingApproval,

    /// Account rejected by the college admin
    #[error("account has been rejected by the college admin")]
    AccountRejected,

    /// Missing or invalid session token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl PlatformError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
