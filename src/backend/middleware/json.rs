/**
 * JSON Body Extractor
 *
 * `axum::Json` with its rejection turned into a `BackendError`, so a bad
 * body (wrong Content-Type, broken JSON, wrong field types) gets the same
 * `{ "error", "status" }` response as every other failure.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::backend::error::BackendError;

/// JSON request body
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
