//! Middleware Module
//!
//! Request-side plumbing shared by the handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token extraction for protected routes
//! - **`json`** - JSON body extractor that rejects with `ApiError`
//! - **`cors`** - CORS headers on every response and preflight handling
//!
//! # Example
//!
//! ```rust,no_run
//! use revus::backend::middleware::{with_cors, AuthenticatedUser};
//!
//! // Handlers take `AuthenticatedUser` as an argument to require a token;
//! // the router is wrapped once with `with_cors`.
//! ```

pub mod auth;
pub mod cors;
pub mod json;

pub use auth::{bearer_token, AuthenticatedUser};
pub use cors::with_cors;
pub use json::JsonBody;
