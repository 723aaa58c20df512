//! Authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use santaverse_core::error::CoreError;
use santaverse_core::types::DbId;

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated caller, taken from the `Authorization: Bearer` header.
///
/// Every entity handler lists this as a parameter; `user_id` is the owner
/// id that scopes all row access, so a handler physically cannot forget to
/// authenticate.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (`claims.sub`).
    pub user_id: DbId,
    /// Role name carried in the token (`admin` or `user`).
    pub role: String,
}

/// Pull the bearer token out of the request headers, if present and
/// well-formed.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing or malformed Authorization header".into(),
            ))
        })?;

        let claims = verify_access_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
