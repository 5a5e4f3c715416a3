/**
 * Authentication Handler Types
 *
 * Request and response bodies for the register and login handlers, plus the
 * presence check both of them apply to their fields.
 */

use serde::{Deserialize, Serialize};

use crate::backend::error::ApiError;

/// Register request
///
/// Fields are optional at the serde level so that a missing field is a
/// validation error rather than a JSON parse error.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// User's email address
    #[serde(default)]
    pub email: Option<String>,
    /// User's password (will be hashed before storage)
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: Option<String>,
    /// User's password (will be verified against stored hash)
    #[serde(default)]
    pub password: Option<String>,
}

/// Register response
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RegisterResponse {
    /// Confirmation message
    pub message: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// JWT token for authentication (1-hour expiration)
    pub token: String,
}

/// Require a non-empty value for `field`
pub fn required_field<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::missing(field)),
    }
}
