/**
 * JSON Body Extractor
 *
 * Like `axum::Json`, but any body that is not valid JSON for `T` rejects
 * with `ApiError::MalformedRequest`, so it reaches the client in the
 * standard error envelope. The raw body is never echoed back.
 *
 * The `Content-Type` header is not checked.
 */

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::backend::error::ApiError;

/// JSON request body
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!("Failed to read request body: {}", e);
            ApiError::MalformedRequest
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!("Rejected request body: {}", e);
            ApiError::MalformedRequest
        })?;

        Ok(JsonBody(value))
    }
}
