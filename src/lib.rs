//! # Unibook-RS
//!
//! Authentication backend for the Unibook university platform.
//!
//! ## Features
//!
//! - **Registration with email OTP**: accounts prove control of their email
//!   address with a short-lived 4-digit code before they can log in
//! - **Role-based login**: students, teachers, forum heads, and platform
//!   administrators share one login endpoint across two disjoint principal
//!   namespaces
//! - **Approval gating**: non-student roles stay pending until a college
//!   admin clears them
//! - **Password reset via OTP**: the same hashed-code machinery drives the
//!   forgot-password flow
//! - **Signed session tokens**: HS256 tokens carrying identity, role, and
//!   college association
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unibook_rs::config::Config;
//! use unibook_rs::server::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod email;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::AuthService;
pub use config::Config;
pub use utils::error::{PlatformError, Result};
