//! Review Summarization Module
//!
//! - **`completion`** - client for the external text completion endpoint
//! - **`types`** - request/response bodies
//! - **`handlers`** - POST /summarizeReviews

pub mod completion;
pub mod handlers;
pub mod types;

pub use completion::{CompletionClient, CompletionConfig, CompletionError};
pub use handlers::summarize_reviews;
pub use types::{SummarizeRequest, SummaryResponse};
