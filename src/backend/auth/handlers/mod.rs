//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - User authentication
//!
//! # Example
//!
//! ```rust,no_run
//! use revus::backend::auth::handlers::{login, register};
//! use revus::backend::AppState;
//! use axum::{routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/register", post(register))
//!     .route("/login", post(login));
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

pub use login::login;
pub use register::register;
pub use types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
