/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables. Secrets have no defaults: a missing `JWT_SECRET`,
 * `OPENAI_API_KEY` or `DATABASE_URL` stops startup.
 *
 * # Variables
 *
 * | Variable          | Required | Default                     |
 * |-------------------|----------|-----------------------------|
 * | `JWT_SECRET`      | yes      |                             |
 * | `OPENAI_API_KEY`  | yes      |                             |
 * | `DATABASE_URL`    | yes      |                             |
 * | `OPENAI_BASE_URL` | no       | `https://api.openai.com/v1` |
 * | `OPENAI_MODEL`    | no       | `gpt-3.5-turbo-instruct`    |
 * | `BCRYPT_COST`     | no       | bcrypt `DEFAULT_COST`       |
 * | `SERVER_PORT`     | no       | `3000`                      |
 */

use thiserror::Error;

use crate::backend::reviews::completion::{CompletionConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be used
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Validated server configuration
#[derive(Clone)]
pub struct Config {
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Completion endpoint settings
    pub completion: CompletionConfig,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
    /// Listening port
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// `.env` is not read here; call `dotenv::dotenv()` first if wanted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary lookup function
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use revus::backend::server::config::Config;
    ///
    /// let vars = HashMap::from([
    ///     ("JWT_SECRET", "s3cret"),
    ///     ("OPENAI_API_KEY", "sk-test"),
    ///     ("DATABASE_URL", "postgres://localhost/revus"),
    /// ]);
    /// let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.port, 3000);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let optional = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());

        let jwt_secret = required("JWT_SECRET")?;
        let api_key = required("OPENAI_API_KEY")?;
        let database_url = required("DATABASE_URL")?;

        let completion = CompletionConfig::new(api_key)
            .with_base_url(optional("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
            .with_model(optional("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()));

        let bcrypt_cost = match optional("BCRYPT_COST") {
            Some(raw) => parse_bcrypt_cost(&raw)?,
            None => bcrypt::DEFAULT_COST,
        };

        let port = match optional("SERVER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "SERVER_PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            jwt_secret,
            database_url,
            completion,
            bcrypt_cost,
            port,
        })
    }
}

fn parse_bcrypt_cost(raw: &str) -> Result<u32, ConfigError> {
    let cost = raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
        name: "BCRYPT_COST",
        reason: e.to_string(),
    })?;

    if !(4..=31).contains(&cost) {
        return Err(ConfigError::Invalid {
            name: "BCRYPT_COST",
            reason: format!("{cost} is outside 4..=31"),
        });
    }
    Ok(cost)
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("completion", &self.completion)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("port", &self.port)
            .finish()
    }
}
