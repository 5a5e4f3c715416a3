/**
 * User Model and Credential Store
 *
 * The credential store owns the `users` collection, keyed by email. Handlers
 * never hold a connection directly: they `open()` a `StoreSession` for the
 * duration of one request. The session is an owned guard, so the underlying
 * connection is released when it drops, on success, on an early `?` return
 * and on panic alike.
 *
 * # Backends
 *
 * - `PgCredentialStore` - PostgreSQL through sqlx (production)
 * - `MemoryCredentialStore` - in-process map (tests, embedding)
 */

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Postgres;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// User record as stored
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert hit the unique email constraint
    #[error("a user with this email already exists")]
    Duplicate,

    /// Query or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A source of per-request store sessions
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Acquire a session for one request
    async fn open(&self) -> Result<Box<dyn StoreSession>, StoreError>;
}

/// Operations available while a store session is held
#[async_trait]
pub trait StoreSession: Send {
    /// Look up a user by email
    async fn find_by_email(&mut self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user
    ///
    /// # Errors
    /// * `StoreError::Duplicate` - if the email is already registered
    async fn insert(&mut self, email: &str, password_hash: &str) -> Result<User, StoreError>;
}

/// PostgreSQL credential store
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Connect to `database_url` and run the embedded migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    /// Wrap an existing pool (migrations are assumed to have run)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn open(&self) -> Result<Box<dyn StoreSession>, StoreError> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgSession { conn }))
    }
}

/// One pooled connection, returned to the pool on drop
struct PgSession {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl StoreSession for PgSession {
    async fn find_by_email(&mut self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(user)
    }

    async fn insert(&mut self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Duplicate,
            other => StoreError::Database(other),
        })?;

        Ok(user)
    }
}

/// In-memory credential store
///
/// Clones share the same users. `open_sessions()` reports how many sessions
/// are currently alive.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<RwLock<HashMap<String, User>>>,
    open_sessions: Arc<AtomicUsize>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share this store as a trait object for `AppState`
    pub fn shared(&self) -> Arc<dyn CredentialStore> {
        Arc::new(self.clone())
    }

    /// Number of sessions opened and not yet dropped
    pub fn open_sessions(&self) -> usize {
        self.open_sessions.load(Ordering::SeqCst)
    }

    /// Number of stored users
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn open(&self) -> Result<Box<dyn StoreSession>, StoreError> {
        self.open_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemorySession {
            users: self.users.clone(),
            open_sessions: self.open_sessions.clone(),
        }))
    }
}

struct MemorySession {
    users: Arc<RwLock<HashMap<String, User>>>,
    open_sessions: Arc<AtomicUsize>,
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        self.open_sessions.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreSession for MemorySession {
    async fn find_by_email(&mut self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert(&mut self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(email) {
            return Err(StoreError::Duplicate);
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(email.to_string(), user.clone());
        Ok(user)
    }
}
