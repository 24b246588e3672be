//! Static-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shiftplan_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured API token.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(_auth: AuthToken) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
///
/// Requests without a valid `Authorization: Bearer <token>` header are
/// rejected with `401 {"error": "Unauthorized"}` before the handler body
/// runs. Missing header, wrong scheme, and wrong token all produce the same
/// response; the rejection does not say which part failed.
#[derive(Debug, Clone, Copy)]
pub struct AuthToken;

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        match token {
            Some(token) if token == state.config.api_token => Ok(AuthToken),
            _ => Err(AppError::Core(CoreError::Unauthorized)),
        }
    }
}
