//! Authentication endpoints
//!
//! This module provides authentication-related API endpoints.

mod email;
mod login;
mod models;
mod password;
mod register;
mod user;

pub use email::{resend_otp, verify_email};
pub use login::login;
pub use models::{
    AccountProfile, AdminProfile, EmailRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, ResetPasswordRequest, VerifyEmailRequest, VerifyEmailResponse,
    VerifyResetOtpRequest,
};
pub use password::{forgot_password, reset_password, verify_reset_otp};
pub use register::register;
pub use user::{bearer_token, me};

use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/verify-email", web::post().to(verify_email))
            .route("/login", web::post().to(login))
            .route("/resend-otp", web::post().to(resend_otp))
            .route("/forgot-password", web::post().to(forgot_password))
            .route("/verify-reset-otp", web::post().to(verify_reset_otp))
            .route("/reset-password", web::post().to(reset_password))
            .route("/me", web::get().to(me)),
    );
}
