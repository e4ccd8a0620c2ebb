//! OpenAI-compatible chat-completions client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::{Result, SleeperError},
    llm::{NarrativeGenerator, NarrativeRequest},
};

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Generation is slow; allow far longer than the data endpoints.
pub const LLM_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, model, OPENAI_API_BASE)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = Client::builder().timeout(LLM_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

/// Pull `choices[0].message.content` out of a completion and parse it.
/// An absent or null content counts as `{}`.
pub fn parse_completion(body: &Value) -> Result<Value> {
    let content = body
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or("{}");

    serde_json::from_str(content).map_err(|e| SleeperError::Narrative {
        message: format!("model reply is not JSON: {e}"),
    })
}

#[async_trait]
impl NarrativeGenerator for OpenAiClient {
    async fn generate(&self, request: &NarrativeRequest) -> Result<Value> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = %self.model, "requesting completion");

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: request.temperature,
        };

        let response: Value = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_completion(&response)
    }
}
