//! Current principal endpoint and helpers

use crate::auth::Principal;
use crate::core::models::UserRole;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::AccountStore;
use crate::utils::error::PlatformError;
use actix_web::http::header::HeaderMap;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use super::models::{AccountProfile, AdminProfile};

/// Current principal profile endpoint
pub async fn me(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, PlatformError> {
    debug!("Profile request");

    let token = bearer_token(req.headers())
        .ok_or_else(|| PlatformError::unauthorized("missing bearer token"))?;
    let claims = state.auth.tokens().verify(token)?;

    match state.auth.principal_for_claims(&claims).await? {
        Some(Principal::Admin(admin)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(AdminProfile::from(&admin))))
        }
        Some(Principal::Account(account)) => {
            let forum_ids = if account.role == UserRole::ForumHead {
                state.storage.forum_ids_for_account(account.id).await?
            } else {
                Vec::new()
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(AccountProfile::from_account(
                &account, forum_ids,
            ))))
        }
        None => Err(PlatformError::not_found("Profile not found")),
    }
}

/// Extract the bearer token from request headers
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
