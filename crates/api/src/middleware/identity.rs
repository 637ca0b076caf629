//! Current-user extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use cruddur_core::identity::CurrentUser;

use crate::error::AppError;
use crate::state::AppState;

/// Resolves the caller through [`AppState::identity`].
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(handle = %user.handle, "handling request");
///     Ok(Json(()))
/// }
/// ```
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let user = state.identity.resolve(credentials).await?;
        Ok(user)
    }
}
