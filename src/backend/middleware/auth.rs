/**
 * Authentication Extractor
 *
 * This module protects routes that require a session token. Handlers take
 * `AuthenticatedUser` as an argument; the extractor reads the
 * `Authorization: Bearer <token>` header, verifies the token against the
 * process secret and hands the user ID to the handler.
 *
 * Failures reject with `ApiError::Auth` (401) before the body is read.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::{ApiError, AuthError};

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated user extracted from a verified bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// # Errors
/// * `AuthError::MissingHeader` - no `Authorization` header
/// * `AuthError::MalformedHeader` - not valid visible ASCII, no `Bearer `
///   prefix, or an empty token
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;

    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MalformedHeader)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<TokenIssuer>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).map_err(|e| {
            tracing::warn!("Rejected request to {}: {}", parts.uri.path(), e);
            e
        })?;

        let tokens = Arc::<TokenIssuer>::from_ref(state);
        let user_id = tokens.verify(token).map_err(|e| {
            tracing::warn!("Rejected token on {}: {}", parts.uri.path(), e);
            ApiError::from(e)
        })?;

        Ok(AuthenticatedUser { user_id })
    }
}
