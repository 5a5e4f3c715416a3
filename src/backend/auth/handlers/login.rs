/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return the token
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 400 response, so the
 *   endpoint cannot be used to probe which emails are registered
 * - Passwords and tokens are never logged
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{required_field, LoginRequest, LoginResponse};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::CredentialStore;
use crate::backend::error::{ApiError, AuthError};
use crate::backend::middleware::JsonBody;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed JSON, missing fields, or invalid credentials
/// * `500 Internal Server Error` - store failure, corrupt stored hash, or
///   token signing failure
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(store): State<Arc<dyn CredentialStore>>,
    State(passwords): State<PasswordHasher>,
    State(tokens): State<Arc<TokenIssuer>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = required_field("email", request.email.as_deref().map(str::trim))?;
    let password = required_field("password", request.password.as_deref())?;
    tracing::info!("Login request for: {}", email);

    let user = {
        let mut session = store.open().await?;
        session.find_by_email(email).await?
    };

    let Some(user) = user else {
        tracing::warn!("Login failed, unknown email: {}", email);
        return Err(AuthError::InvalidCredentials.into());
    };

    if !passwords.verify(password, &user.password_hash).await? {
        tracing::warn!("Login failed, wrong password for: {}", email);
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = tokens.issue(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.email, user.id);

    Ok(Json(LoginResponse { token }))
}
