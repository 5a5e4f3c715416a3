/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Parse the JSON body
 * 2. Validate that email and password are present
 * 3. Hash the password using bcrypt
 * 4. Open a store session and check the email is not taken
 * 5. Insert the user
 * 6. Return a confirmation message
 *
 * The store session is dropped when the handler returns, whichever way it
 * returns.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{required_field, RegisterRequest, RegisterResponse};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::users::CredentialStore;
use crate::backend::error::ApiError;
use crate::backend::middleware::JsonBody;

/// Confirmation returned on successful registration
pub const REGISTERED_MESSAGE: &str = "User registered successfully";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed JSON, missing email/password, or the email
///   is already registered
/// * `500 Internal Server Error` - hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "p1" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User registered successfully" }
/// ```
pub async fn register(
    State(store): State<Arc<dyn CredentialStore>>,
    State(passwords): State<PasswordHasher>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let email = required_field("email", request.email.as_deref().map(str::trim))?;
    let password = required_field("password", request.password.as_deref())?;
    tracing::info!("Register request for: {}", email);

    let password_hash = passwords.hash(password).await?;

    let mut session = store.open().await?;
    if session.find_by_email(email).await?.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(ApiError::Conflict("User already exists".to_string()));
    }
    let user = session.insert(email, &password_hash).await?;

    tracing::info!("User registered successfully: {} ({})", user.email, user.id);

    Ok(Json(RegisterResponse {
        message: REGISTERED_MESSAGE.to_string(),
    }))
}
