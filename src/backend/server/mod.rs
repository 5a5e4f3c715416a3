//! Server Module
//!
//! This module contains the server-side code for configuring and
//! initializing the Axum application.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `Config::from_env()` validates the environment
//! 2. **State Creation**: store, hasher, token issuer and completion client
//! 3. **Router Creation**: routes, CORS and tracing layers
//!
//! # Example
//!
//! ```rust,no_run
//! use revus::backend::server::{config::Config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{Config, ConfigError};
pub use init::{create_app, InitError};
pub use state::AppState;
