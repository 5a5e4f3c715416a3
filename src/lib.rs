//! Revus - Main Library
//!
//! Revus is a small authenticated gateway in front of a text-completion API.
//! Users register and log in with an email and password, receive a signed
//! bearer token, and use that token to have product reviews summarized by an
//! upstream language model.
//!
//! # Module Structure
//!
//! - **`backend`** - Axum HTTP server
//!   - Credential store, password hashing and JWT sessions
//!   - Review summarization through the completion endpoint
//!   - Error envelopes, CORS and request extraction
//!
//! # Usage
//!
//! ```rust,no_run
//! use revus::backend::server::{config::Config, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, ApiError>`. `ApiError` renders as a JSON
//! envelope `{ "error": ..., "details": ... }` with the matching status code.

/// Backend server-side code
pub mod backend;
