//! Route Configuration Module
//!
//! - **`router`** - Main router creation and layers
//! - **`api_routes`** - API endpoints (register, login, summarizeReviews)
//!
//! # Example
//!
//! ```rust,no_run
//! use revus::backend::routes::create_router;
//! use revus::backend::server::state::AppState;
//!
//! # fn example(app_state: AppState) {
//! let router = create_router(app_state);
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
