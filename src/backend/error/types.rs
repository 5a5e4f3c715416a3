/**
 * Backend Error Types
 *
 * This module defines the error taxonomy shared by every handler. Each
 * variant is produced where the failure happens (body extraction, field
 * validation, store access, upstream call) and carries its own HTTP status.
 *
 * # Error Categories
 *
 * - `Validation` - missing or wrongly typed request fields (400)
 * - `Auth` - credential and bearer token problems (400 / 401)
 * - `Conflict` - duplicate registration (400)
 * - `MalformedRequest` - body is not valid JSON (400)
 * - `Upstream` - completion endpoint failure (500)
 * - `Store` - credential store failure (500)
 * - `Internal` - anything else on the server side (500)
 */

use axum::http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

use crate::backend::auth::passwords::HashError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;
use crate::backend::reviews::completion::CompletionError;

/// Wording shared by every credential failure on login.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Authentication failures
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are indistinguishable
    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,

    /// No `Authorization` header on a protected route
    #[error("Missing Authorization header")]
    MissingHeader,

    /// `Authorization` header present but not of the form `Bearer <token>`
    #[error("Malformed Authorization header, expected 'Bearer <token>'")]
    MalformedHeader,

    /// Bad signature or unreadable token
    #[error("Invalid token")]
    TokenInvalid,

    /// Token signature is fine but its expiry has passed
    #[error("Token expired")]
    TokenExpired,
}

/// Errors returned by HTTP handlers
///
/// Every variant converts into a single JSON envelope through
/// `IntoResponse` (see `conversion.rs`).
///
/// ```rust
/// use revus::backend::error::ApiError;
///
/// let err = ApiError::validation("email", "Missing required parameter: email");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// A request field is missing or has the wrong type
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The offending field
        field: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// Credential or bearer token failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The resource already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The request body could not be parsed as JSON
    #[error("Invalid JSON data")]
    MalformedRequest,

    /// Only POST is served on the gateway endpoints
    #[error("Invalid request method. Only POST requests are allowed.")]
    MethodNotAllowed,

    /// No route matched
    #[error("Not found")]
    NotFound,

    /// The completion endpoint failed
    #[error("Upstream completion error (status {status:?}): {message}")]
    Upstream {
        /// Upstream HTTP status, if a response was received
        status: Option<u16>,
        /// Upstream error detail, logged but never returned to clients
        message: String,
    },

    /// The credential store failed
    #[error("Store error: {0}")]
    Store(#[source] StoreError),

    /// Any other server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error for `field`
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a missing-parameter validation error for `field`
    pub fn missing(field: &'static str) -> Self {
        Self::validation(field, format!("Missing required parameter: {field}"))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::MalformedRequest => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Server-side variants map to fixed wording so no internal detail
    /// reaches the client.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Auth(err) => err.to_string(),
            Self::Conflict(message) => message.clone(),
            Self::MalformedRequest | Self::MethodNotAllowed | Self::NotFound => self.to_string(),
            Self::Upstream { .. } => "Failed to summarize reviews".to_string(),
            Self::Store(_) | Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Optional structured details for the error envelope
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::Validation { field, .. } => Some(json!({ "field": field })),
            Self::Upstream {
                status: Some(status),
                ..
            } => Some(json!({ "upstreamStatus": status })),
            _ => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::Conflict("User already exists".to_string()),
            other => Self::Store(other),
        }
    }
}

impl From<HashError> for ApiError {
    fn from(err: HashError) -> Self {
        match err {
            HashError::InvalidInput => Self::missing("password"),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => Self::Auth(AuthError::TokenInvalid),
            TokenError::Expired => Self::Auth(AuthError::TokenExpired),
            TokenError::Signing(message) => Self::Internal(message),
        }
    }
}

impl From<CompletionError> for ApiError {
    fn from(err: CompletionError) -> Self {
        Self::Upstream {
            status: err.status(),
            message: err.to_string(),
        }
    }
}
