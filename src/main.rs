//! Unibook authentication backend
//!
//! Registration, email-OTP verification, role-based login, and password
//! reset for the Unibook university platform.

use std::process::ExitCode;
use tracing::Level;
use unibook_rs::server;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging system
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    // Load .env before reading configuration from the environment
    if dotenvy::dotenv().is_err() {
        tracing::info!("No .env file found, using environment variables");
    }

    match server::builder::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
