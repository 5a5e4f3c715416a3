/**
 * Error Conversion
 *
 * `ApiError` implements `IntoResponse`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Missing required parameter: email",
 *   "details": { "field": "email" }
 * }
 * ```
 *
 * `details` is omitted when the error has none. Server-side failures are
 * logged here with their full cause and rendered with fixed wording.
 */

use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::error::types::ApiError;

/// JSON body of every error response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    /// Human-readable error message
    pub error: String,
    /// Optional structured context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<&ApiError> for ErrorEnvelope {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.message(),
            details: err.details(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        }

        (status, Json(ErrorEnvelope::from(&self))).into_response()
    }
}
