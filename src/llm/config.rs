//! LLM client configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// LLM provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// OpenAI-compatible chat completions API (default)
    #[default]
    OpenAI,
    /// Ollama API (local)
    Ollama,
}

impl LlmProvider {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(Self::OpenAI),
            "ollama" => Some(Self::Ollama),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Ollama => "ollama",
        }
    }

    fn default_endpoint(&self) -> &'static str {
        match self {
            Self::OpenAI => "https://api.openai.com",
            Self::Ollama => "http://localhost:11434",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the advisory LLM client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Whether advisory calls are attempted at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// LLM provider (openai or ollama)
    #[serde(default)]
    pub provider: LlmProvider,
    /// API endpoint; unset means the provider's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// API key for OpenAI-compatible providers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "gpt-5".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl LlmConfig {
    /// Base default without env overrides.
    fn base_default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: LlmProvider::default(),
            endpoint: None,
            api_key: None,
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Check if the config equals the default (for skip_serializing_if).
    pub fn is_default(&self) -> bool {
        *self == Self::base_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured endpoint, or the provider's default when none is set.
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| self.provider.default_endpoint())
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `LLM_ENABLED`: "true" or "false"
    /// - `LLM_PROVIDER`: "openai" (default) or "ollama"
    /// - `LLM_ENDPOINT`: API endpoint (defaults based on provider)
    /// - `LLM_API_KEY`: API key; `OPENAI_API_KEY` is used when unset
    /// - `LLM_MODEL`: Model name
    /// - `LLM_TIMEOUT_SECS`: Request timeout in seconds
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_overrides(|name| std::env::var(name).ok());
        self
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("LLM_ENABLED") {
            self.enabled = val.eq_ignore_ascii_case("true") || val == "1";
        }

        if let Some(provider) = var("LLM_PROVIDER").and_then(|v| LlmProvider::from_str(&v)) {
            self.provider = provider;
        }

        // Explicit endpoint always wins
        if let Some(endpoint) = var("LLM_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }

        if let Some(key) = var("LLM_API_KEY") {
            self.api_key = Some(key);
        } else if self.api_key.is_none() && self.provider == LlmProvider::OpenAI {
            self.api_key = var("OPENAI_API_KEY");
        }

        if let Some(model) = var("LLM_MODEL") {
            self.model = model;
        }

        if let Some(secs) = var("LLM_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.timeout_secs = secs;
        }
    }
}
