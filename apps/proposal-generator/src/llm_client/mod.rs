//! LLM Client: the single point of entry for all chat-completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the provider API directly.
//! Pipeline code depends on the `LlmBackend` trait; `LlmClient` is the only
//! production implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod json_span;
pub mod prompts;
#[cfg(test)]
pub mod testing;

pub use json_span::parse_json_object;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("Rate limited after {retries} attempts")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Seam between the pipeline and the model provider.
///
/// `complete` sends one user prompt (plus system prompt) and returns the raw
/// text of the first choice, untouched.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    async fn complete(&self, prompt: &str, system: &str, temperature: f32)
        -> Result<String, LlmError>;

    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Delay before the first retry; doubles on each further attempt.
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

/// Chat Completions client with retry on rate limits and server errors.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()?,
            api_key: config.openai_api_key.clone(),
            endpoint: format!("{}/chat/completions", config.openai_base_url),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            max_retries: config.max_retries,
            retry_base_delay: RETRY_BASE_DELAY,
        })
    }

    /// Makes a raw call to the API, returning the full response object.
    /// Retries on transport errors, 429 (rate limit) and 5xx with exponential
    /// backoff. A 429 on the last attempt is reported as `RateLimited`.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        temperature: f32,
    ) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            temperature,
            max_tokens: self.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let attempts = self.max_retries.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.send_once(&request_body).await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < attempts && e.is_retryable() => {
                    // Exponential backoff: 1s, 2s, 4s
                    let delay = backoff_delay(self.retry_base_delay, attempt);
                    warn!(
                        "LLM call attempt {} failed ({}), retrying after {}ms...",
                        attempt,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(LlmError::Api { status: 429, .. }) => {
                    return Err(LlmError::RateLimited { retries: attempt })
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(&self, request_body: &ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("LLM API returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                self.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

impl LlmError {
    /// Transport failures, rate limits and server errors are worth another attempt.
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(_) => true,
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[async_trait]
impl LlmBackend for LlmClient {
    async fn complete(
        &self,
        prompt: &str,
        system: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, system, temperature).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Delay after failed attempt `attempt` (1-based). Capped at 64x `base`.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(6);
    base.saturating_mul(1 << exponent)
}

/// Pulls `error.message` out of an API error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
