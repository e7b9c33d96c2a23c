//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;

/// Extract an integer identity from the single path parameter.
///
/// Non-numeric ids are a coercion failure and become a 400 JSON error
/// instead of axum's plain-text rejection.
pub struct IdParam(pub i32);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidParameter {
                field: "id",
                reason: e.body_text(),
            })?;

        let id = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| ApiError::InvalidParameter {
                field: "id",
                reason: format!("expected an integer, got '{}'", raw),
            })?;

        Ok(Self(id))
    }
}

/// JSON request body whose rejections (bad syntax, missing fields, wrong
/// content type) become a 400 JSON error like every other API failure.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidParameter {
                field: "body",
                reason: e.body_text(),
            })?;

        Ok(Self(value))
    }
}
