/**
 * Completion Client
 *
 * Thin client for an OpenAI-compatible text completion endpoint
 * (`POST {base_url}/completions`). One request per call, no retries.
 *
 * The prompt is a fixed instruction followed by the reviews, wrapped in
 * `^^^` delimiters so the model can tell where the user text starts and ends.
 */

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Instruction placed before the reviews in every prompt
pub const SUMMARY_INSTRUCTION: &str = "Provide a balanced summary of the following reviews in up to four sentences. \
Make sure to highlight both positive and negative comments. After the summary, list emotions expressed in the reviews, \
categorized into 'Positive' and 'Negative'.";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 150;
const TOP_P: f64 = 1.0;
const FREQUENCY_PENALTY: f64 = 0.0;
const PRESENCE_PENALTY: f64 = 0.0;

/// Build the completion prompt for `reviews`
pub fn build_prompt(reviews: &str) -> String {
    format!("{SUMMARY_INSTRUCTION}\n\nReviews: ^^^{reviews}^^^")
}

/// Completion client errors
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Connection, TLS or body read failure
    #[error("request to completion endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("completion endpoint returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// 2xx response that is not a completion
    #[error("failed to parse completion response: {0}")]
    Parse(String),

    /// Completion response without choices
    #[error("completion response contained no choices")]
    Empty,
}

impl CompletionError {
    /// Upstream HTTP status, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::Parse(_) | Self::Empty => None,
        }
    }
}

/// Completion endpoint configuration
#[derive(Clone)]
pub struct CompletionConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL, without the trailing `/completions`
    pub base_url: String,
    /// Model name
    pub model: String,
}

impl CompletionConfig {
    /// Create a configuration with the default base URL and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set the base URL (for compatible endpoints and tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

/// Client for the completion endpoint
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    config: CompletionConfig,
    client: Client,
}

impl CompletionClient {
    /// Create a new completion client
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }

    /// Model this client requests
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Summarize `reviews` and return the first completion, trimmed
    #[instrument(skip(self, reviews), fields(model = %self.config.model, review_chars = reviews.len()))]
    pub async fn summarize(&self, reviews: &str) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: &self.config.model,
            prompt: build_prompt(reviews),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
        };

        let response = self
            .client
            .post(format!("{}/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!("Completion endpoint responded with {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(CompletionError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text.trim().to_string())
            .ok_or(CompletionError::Empty)
    }
}
