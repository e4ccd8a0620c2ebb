//! Narrative content (power rankings, matchup predictions) from a chat model.
//!
//! Commands only see [`NarrativeGenerator`]; [`client::OpenAiClient`] is the
//! production implementation and tests substitute their own.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

pub mod client;
pub mod prompt;

pub use client::OpenAiClient;

/// Model used when `--model` is not given.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Environment variable holding the API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// One system + user prompt pair.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Ask for a JSON object and return it as parsed. The shape is whatever
    /// the model produced; callers pick out the fields they need.
    async fn generate(&self, request: &NarrativeRequest) -> Result<Value>;
}
