//! Email verification endpoints

use crate::auth::EmailVerification;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::PlatformError;
use actix_web::{HttpResponse, web};
use tracing::info;

use super::models::{EmailRequest, MessageResponse, VerifyEmailRequest, VerifyEmailResponse};

/// Email verification endpoint
///
/// A verified-but-unapproved account gets the distinct pending-approval
/// outcome instead of a token.
pub async fn verify_email(
    state: web::Data<AppState>,
    request: web::Json<VerifyEmailRequest>,
) -> Result<HttpResponse, PlatformError> {
    info!("Email verification request: {}", request.email);

    match state
        .auth
        .verify_email(&request.email, &request.otp)
        .await?
    {
        EmailVerification::LoggedIn { token } => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(VerifyEmailResponse {
                message: "Email verified successfully.".to_string(),
                token,
            })))
        }
        EmailVerification::PendingApproval => Err(PlatformError::PendingApproval),
    }
}

/// Verification OTP resend endpoint
///
/// Always answers with the same message; existence is never revealed.
pub async fn resend_otp(
    state: web::Data<AppState>,
    request: web::Json<EmailRequest>,
) -> Result<HttpResponse, PlatformError> {
    info!("OTP resend request");

    state.auth.resend_verification_otp(&request.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
        message: "A new verification code has been sent to your email.".to_string(),
    })))
}
