//! JSON body extractor with rejections mapped into the error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use shiftplan_core::error::CoreError;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] as an extractor.
///
/// The stock extractor answers malformed bodies with 422 and a plain-text
/// message; this API reports them as 400 validation failures in the same
/// `{"error", "code"}` envelope as every other bad input. Also implements
/// [`IntoResponse`] so handlers can use one `Json` in both directions.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => Err(AppError::Core(CoreError::Validation(rejection.body_text()))),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
