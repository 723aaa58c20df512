//! Role check on top of [`AuthUser`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use santaverse_core::error::CoreError;
use santaverse_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Extractor that admits only the `admin` role; everyone else gets 403.
///
/// Listing this as a handler parameter is the whole authorization story
/// for the `/admin` routes.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
