//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use std::borrow::Cow;
use tracing::{debug, error};

/// Health status payload
#[derive(Debug, serde::Serialize)]
pub struct HealthStatus {
    /// Overall service status
    pub status: Cow<'static, str>,
    /// Database connectivity
    pub database: bool,
    /// Report timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Service version
    pub version: Cow<'static, str>,
}

/// Basic health check endpoint
///
/// Probes database connectivity; used by load balancers and monitoring.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    match state.storage.health_check().await {
        Ok(()) => {
            let health_status = HealthStatus {
                status: Cow::Borrowed("healthy"),
                database: true,
                timestamp: chrono::Utc::now(),
                version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
        }
        Err(e) => {
            error!("Database health check failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error_for_type(
                "Database connection failed".to_string(),
            )))
        }
    }
}
