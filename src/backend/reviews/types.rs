//! Review summarization request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summarize request
///
/// `reviews` stays untyped here: a string or an array of strings are both
/// accepted, and anything else is reported as a validation error rather than
/// a JSON parse error.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub reviews: Option<Value>,
}

/// Summarize response
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct SummaryResponse {
    pub summary: String,
}
