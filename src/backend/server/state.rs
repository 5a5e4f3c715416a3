/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds only shareable, immutable pieces:
 * - the credential store (pool-backed in production)
 * - the password hasher settings
 * - the token issuer holding the signing secret
 * - the completion client
 *
 * Nothing in it is mutated by requests, so no locking is needed.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use revus::backend::reviews::CompletionClient;
 *
 * async fn handler(State(completions): State<CompletionClient>) {
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::CredentialStore;
use crate::backend::reviews::completion::CompletionClient;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Credential store; handlers open one session per request
    pub store: Arc<dyn CredentialStore>,

    /// bcrypt hasher
    pub passwords: PasswordHasher,

    /// Session token issuer and verifier
    pub tokens: Arc<TokenIssuer>,

    /// Completion endpoint client
    pub completions: CompletionClient,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        passwords: PasswordHasher,
        tokens: TokenIssuer,
        completions: CompletionClient,
    ) -> Self {
        Self {
            store,
            passwords,
            tokens: Arc::new(tokens),
            completions,
        }
    }
}

impl FromRef<AppState> for Arc<dyn CredentialStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}

impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for CompletionClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.completions.clone()
    }
}
