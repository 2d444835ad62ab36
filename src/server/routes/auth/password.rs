//! Password reset endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::PlatformError;
use actix_web::{HttpResponse, web};
use tracing::info;

use super::models::{EmailRequest, MessageResponse, ResetPasswordRequest, VerifyResetOtpRequest};

/// Forgot password endpoint
///
/// Always answers with the same message; existence is never revealed.
pub async fn forgot_password(
    state: web::Data<AppState>,
    request: web::Json<EmailRequest>,
) -> Result<HttpResponse, PlatformError> {
    info!("Password reset request");

    state.auth.request_password_reset(&request.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
        message: "A password reset code has been sent to your email.".to_string(),
    })))
}

/// Reset-OTP check endpoint
///
/// Pure check: lets a client confirm the code before showing the new-password
/// form. No state changes on success.
pub async fn verify_reset_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyResetOtpRequest>,
) -> Result<HttpResponse, PlatformError> {
    info!("Reset OTP check request");

    state
        .auth
        .verify_reset_otp(&request.email, &request.otp)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
        message: "OTP verified successfully.".to_string(),
    })))
}

/// Password reset endpoint
pub async fn reset_password(
    state: web::Data<AppState>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, PlatformError> {
    info!("Password reset submission");

    state
        .auth
        .reset_password(&request.email, &request.otp, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
        message: "Password reset successfully.".to_string(),
    })))
}
