//! Test application
//!
//! Builds the production router around test doubles: a
//! `MemoryCredentialStore` (or a store that always fails), a cheap bcrypt
//! cost and a `wiremock` server standing in for the completion endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use wiremock::MockServer;

use revus::backend::auth::passwords::PasswordHasher;
use revus::backend::auth::sessions::TokenIssuer;
use revus::backend::auth::users::{CredentialStore, MemoryCredentialStore, StoreError, StoreSession};
use revus::backend::reviews::completion::{CompletionClient, CompletionConfig};
use revus::backend::routes::create_router;
use revus::backend::server::state::AppState;

/// Signing secret used by every test app
pub const TEST_SECRET: &str = "integration-test-secret";

/// Minimum bcrypt cost, keeps tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Running test application
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryCredentialStore,
    pub tokens: TokenIssuer,
    pub completion_api: MockServer,
}

impl TestApp {
    /// Create a test app backed by an empty in-memory store
    pub async fn new() -> Self {
        let store = MemoryCredentialStore::new();
        let completion_api = MockServer::start().await;
        let server = server_for(store.shared(), &completion_api);

        Self {
            server,
            store,
            tokens: TokenIssuer::new(TEST_SECRET),
            completion_api,
        }
    }
}

/// Create a test server whose credential store always fails
pub async fn failing_store_server() -> (TestServer, MockServer) {
    let completion_api = MockServer::start().await;
    let server = server_for(Arc::new(FailingStore), &completion_api);
    (server, completion_api)
}

fn server_for(store: Arc<dyn CredentialStore>, completion_api: &MockServer) -> TestServer {
    let completions = CompletionClient::new(
        CompletionConfig::new("test-api-key").with_base_url(completion_api.uri()),
    )
    .expect("Failed to build completion client");

    let state = AppState::new(
        store,
        PasswordHasher::new(TEST_BCRYPT_COST),
        TokenIssuer::new(TEST_SECRET),
        completions,
    );

    TestServer::new(create_router(state)).expect("Failed to start test server")
}

/// Detail that must never reach a client
pub const FAILING_STORE_DETAIL: &str = "connection refused: postgres://revus:hunter2@db:5432";

/// Credential store that cannot be reached
pub struct FailingStore;

#[async_trait]
impl CredentialStore for FailingStore {
    async fn open(&self) -> Result<Box<dyn StoreSession>, StoreError> {
        Err(StoreError::Unavailable(FAILING_STORE_DETAIL.to_string()))
    }
}
