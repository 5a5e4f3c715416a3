//! Authentication Module
//!
//! This module handles user registration, credential verification and
//! session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User record and credential stores (PostgreSQL, in-memory)
//! - **`passwords`** - bcrypt hashing off the async runtime
//! - **`sessions`** - JWT token issuing and verification
//! - **`handlers`** - HTTP handlers for `/register` and `/login`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential stores
//! ├── passwords.rs    - Password hashing
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password → password hashed → user stored
//! 2. **Login**: email and password → hash verified → JWT token returned
//! 3. **Protected calls**: `Authorization: Bearer <token>` → token verified
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are signed with a process-wide secret and expire after 1 hour
//! - Unknown email and wrong password return the same response

/// User data model and credential stores
pub mod users;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use handlers::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use passwords::{HashError, PasswordHasher};
pub use sessions::{Claims, TokenError, TokenIssuer, TOKEN_TTL_SECS};
pub use users::{CredentialStore, MemoryCredentialStore, PgCredentialStore, StoreError, StoreSession, User};
