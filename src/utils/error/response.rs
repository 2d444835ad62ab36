//! HTTP response handling for errors

use super::types::PlatformError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl PlatformError {
    /// Status code, stable error code, and outward message for this error
    ///
    /// Internal failures collapse to a generic message; the real cause stays
    /// in the server logs.
    fn response_parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            PlatformError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.to_string())
            }
            PlatformError::Conflict(_) => (
                StatusCode::CONFLICT,
                "CONFLICT",
                "Could not create account".to_string(),
            ),
            PlatformError::InvalidOrExpiredOtp => (
                StatusCode::BAD_REQUEST,
                "INVALID_OR_EXPIRED_OTP",
                "Invalid OTP or request has expired".to_string(),
            ),
            PlatformError::InvalidOtp => {
                (StatusCode::BAD_REQUEST, "INVALID_OTP", "Invalid OTP".to_string())
            }
            PlatformError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid credentials".to_string(),
            ),
            PlatformError::NotVerified { .. } => (
                StatusCode::FORBIDDEN,
                "NOT_VERIFIED",
                "Your account is not verified. Please complete the OTP verification process."
                    .to_string(),
            ),
            PlatformError::PendingApproval => (
                StatusCode::FORBIDDEN,
                "PENDING_APPROVAL",
                "Your account is pending approval from the college admin.".to_string(),
            ),
            PlatformError::AccountRejected => (
                StatusCode::FORBIDDEN,
                "ACCOUNT_REJECTED",
                "Your account has been rejected by the college admin.".to_string(),
            ),
            PlatformError::Unauthorized(_) => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized: Invalid or missing token".to_string(),
            ),
            PlatformError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string())
            }
            PlatformError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database operation failed".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        }
    }
}

impl ResponseError for PlatformError {
    fn status_code(&self) -> StatusCode {
        self.response_parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = self.response_parts();

        // NOT_VERIFIED carries the account email so clients can offer a resend
        let email = match self {
            PlatformError::NotVerified { email } => Some(email.clone()),
            _ => None,
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                email,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub timestamp: i64,
}
