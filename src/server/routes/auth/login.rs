//! Login endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::PlatformError;
use actix_web::{HttpResponse, web};
use tracing::info;

use super::models::{LoginRequest, LoginResponse};

/// Login endpoint for both principal namespaces
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, PlatformError> {
    info!("Login attempt: {}", request.email);

    let token = state.auth.login(&request.email, &request.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse { token })))
}
