//! Advisory LLM integration.
//!
//! The guidance resolver talks to the model through [`AdvisoryService`], so
//! the HTTP client here can be swapped for a stub in tests.

mod client;
mod config;
pub mod prompts;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use client::LlmClient;
pub use config::{LlmConfig, LlmProvider};

/// A chat-completion backend.
#[async_trait]
pub trait AdvisoryService: Send + Sync {
    /// Run one completion and return the raw response text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, AdvisoryError>;
}

/// Any failure of the advisory backend.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory service is disabled")]
    Disabled,

    #[error("no API key configured for provider {0}")]
    MissingApiKey(LlmProvider),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("empty response from model")]
    EmptyResponse,
}
