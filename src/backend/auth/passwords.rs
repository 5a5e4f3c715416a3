/**
 * Password Hashing
 *
 * bcrypt with a random per-call salt. The cost and salt are embedded in the
 * hash string, so `verify` needs nothing but the stored hash.
 *
 * bcrypt is slow, so both operations run on tokio's blocking
 * pool instead of the async workers.
 */

use bcrypt::DEFAULT_COST;
use thiserror::Error;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum HashError {
    /// Empty password
    #[error("password must be a non-empty string")]
    InvalidInput,

    /// bcrypt rejected the input or the stored hash
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking task panicked or was cancelled
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// bcrypt password hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// bcrypt cost factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh salt
    ///
    /// # Errors
    /// * `HashError::InvalidInput` - if `password` is empty
    pub async fn hash(&self, password: &str) -> Result<String, HashError> {
        if password.is_empty() {
            return Err(HashError::InvalidInput);
        }

        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    /// Check `password` against a stored bcrypt hash
    ///
    /// Returns `Ok(false)` on mismatch. A malformed stored hash is an error,
    /// not a mismatch.
    pub async fn verify(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        if password.is_empty() {
            return Err(HashError::InvalidInput);
        }

        let password = password.to_owned();
        let hashed = hashed.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await??;
        Ok(valid)
    }
}
