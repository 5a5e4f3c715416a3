//! Backend Error Module
//!
//! This module defines the error types returned by HTTP handlers and their
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and AuthError
//! └── conversion.rs - IntoResponse and the JSON error envelope
//! ```
//!
//! Component errors (`StoreError`, `HashError`, `TokenError`,
//! `CompletionError`) convert into `ApiError` with `From`, so handlers use
//! `?` throughout and nothing escapes uncaught.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::ErrorEnvelope;
pub use types::{ApiError, AuthError, INVALID_CREDENTIALS};
