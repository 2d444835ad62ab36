//! Account registration endpoint

use crate::auth::Registration;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::PlatformError;
use actix_web::{HttpResponse, web};
use tracing::info;

use super::models::{MessageResponse, RegisterRequest};

/// Account registration endpoint
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, PlatformError> {
    info!("Registration request: {}", request.email);

    let request = request.into_inner();

    state
        .auth
        .register(Registration {
            full_name: request.full_name,
            email: request.email,
            password: request.password,
            role: request.role,
            college_id: request.college_id,
            forum_id: request.forum_id,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(MessageResponse {
        message: "Registration successful. Please check your email for a verification code."
            .to_string(),
    })))
}
