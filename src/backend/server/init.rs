/**
 * Server Initialization
 *
 * This module builds the application from a validated `Config`.
 *
 * # Initialization Process
 *
 * 1. Connect the credential store and run migrations
 * 2. Build the password hasher and token issuer
 * 3. Build the completion client
 * 4. Create and configure the router
 *
 * Any failure aborts startup; the server never runs half-configured.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::{PgCredentialStore, StoreError};
use crate::backend::reviews::completion::{CompletionClient, CompletionError};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::Config;
use crate::backend::server::state::AppState;

/// Startup errors
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to initialize credential store: {0}")]
    Store(#[from] StoreError),

    #[error("failed to initialize completion client: {0}")]
    Completion(#[from] CompletionError),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `InitError` if the database is unreachable, migrations fail or
/// the HTTP client cannot be built.
pub async fn create_app(config: &Config) -> Result<Router, InitError> {
    tracing::info!("Initializing revus backend server");

    // Step 1: Credential store
    let store = PgCredentialStore::connect(&config.database_url).await?;

    // Step 2: Auth components
    let passwords = PasswordHasher::new(config.bcrypt_cost);
    let tokens = TokenIssuer::new(&config.jwt_secret);

    // Step 3: Completion client
    let completions = CompletionClient::new(config.completion.clone())?;
    tracing::info!("Completion client configured for model {}", completions.model());

    // Step 4: Router
    let app_state = AppState::new(Arc::new(store), passwords, tokens, completions);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
