//! Backend Module
//!
//! This module contains all server-side code for Revus. It provides an Axum
//! HTTP server exposing three endpoints:
//!
//! - `POST /register` - create an account
//! - `POST /login` - exchange credentials for a bearer token
//! - `POST /summarizeReviews` - summarize reviews (requires a bearer token)
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly, CORS and fallbacks
//! - **`auth`** - Credential store, password hashing, JWT sessions, handlers
//! - **`reviews`** - Completion client and the summarization handler
//! - **`middleware`** - Bearer extraction and JSON body extraction
//! - **`error`** - `ApiError` and its HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server entry point
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── reviews/        - Review summarization
//! ├── middleware/     - Request extractors and CORS
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` only holds shareable, immutable services: the credential
//! store handle, the password hasher, the token issuer and the completion
//! client. No request mutates it, so handlers can run concurrently without
//! locking.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Review summarization
pub mod reviews;

/// Request extractors and response layers
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppState};
