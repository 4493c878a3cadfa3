//! HTTP client for OpenAI-compatible and Ollama chat APIs.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AdvisoryError, AdvisoryService, LlmConfig, LlmProvider};

/// LLM client for first-aid advisory requests.
pub struct LlmClient {
    config: LlmConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// OpenAI chat completions request format.
#[derive(Debug, Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Ollama chat request format.
#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: ResponseMessage,
}

impl LlmClient {
    /// Create a new LLM client with the given configuration.
    pub fn new(config: LlmConfig) -> Result<Self, AdvisoryError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AdvisoryError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint().trim_end_matches('/'), path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> AdvisoryError {
        if e.is_timeout() {
            AdvisoryError::Timeout(self.config.timeout())
        } else {
            AdvisoryError::Connection(e.to_string())
        }
    }

    /// Read a response body, turning non-2xx statuses into `AdvisoryError::Api`.
    async fn read_body(&self, resp: reqwest::Response) -> Result<String, AdvisoryError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.map_send_error(e))?;
        if !status.is_success() {
            return Err(AdvisoryError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn call_openai(
        &self,
        messages: Vec<ChatMessage<'_>>,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, AdvisoryError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(AdvisoryError::MissingApiKey(LlmProvider::OpenAI))?;

        let request = OpenAIRequest {
            model: &self.config.model,
            messages,
            temperature,
            max_tokens,
        };

        let resp = self
            .client
            .post(self.url("/v1/chat/completions"))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let body = self.read_body(resp).await?;
        parse_openai_response(&body)
    }

    async fn call_ollama(
        &self,
        messages: Vec<ChatMessage<'_>>,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, AdvisoryError> {
        let request = OllamaRequest {
            model: &self.config.model,
            messages,
            stream: false,
            options: OllamaOptions {
                temperature,
                num_predict: max_tokens,
            },
        };

        let resp = self
            .client
            .post(self.url("/api/chat"))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let body = self.read_body(resp).await?;
        parse_ollama_response(&body)
    }
}

#[async_trait]
impl AdvisoryService for LlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, AdvisoryError> {
        if !self.config.enabled {
            return Err(AdvisoryError::Disabled);
        }

        let messages = vec![
            ChatMessage {
                role: "system",
                content: system_prompt,
            },
            ChatMessage {
                role: "user",
                content: user_prompt,
            },
        ];

        debug!(
            "Advisory request to {} ({}, model {})",
            self.config.endpoint(), self.config.provider, self.config.model
        );
        match self.config.provider {
            LlmProvider::OpenAI => self.call_openai(messages, max_tokens, temperature).await,
            LlmProvider::Ollama => self.call_ollama(messages, max_tokens, temperature).await,
        }
    }
}

fn non_empty(content: Option<String>) -> Result<String, AdvisoryError> {
    match content {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AdvisoryError::EmptyResponse),
    }
}

fn parse_openai_response(body: &str) -> Result<String, AdvisoryError> {
    let parsed: OpenAIResponse =
        serde_json::from_str(body).map_err(|e| AdvisoryError::Malformed(e.to_string()))?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AdvisoryError::Malformed("no choices in response".to_string()))?;
    non_empty(choice.message.content)
}

fn parse_ollama_response(body: &str) -> Result<String, AdvisoryError> {
    let parsed: OllamaResponse =
        serde_json::from_str(body).map_err(|e| AdvisoryError::Malformed(e.to_string()))?;
    non_empty(parsed.message.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> LlmConfig {
        LlmConfig {
            enabled: true,
            provider: LlmProvider::OpenAI,
            endpoint: None,
            api_key: Some("sk-test".to_string()),
            model: "gpt-5".to_string(),
            timeout_secs: 2,
        }
    }

    #[test]
    fn test_parse_openai_response() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"  Apply pressure.  "}}]}"#;
        assert_eq!(parse_openai_response(body).unwrap(), "  Apply pressure.  ");

        let err = parse_openai_response(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, AdvisoryError::Malformed(_)));

        let err = parse_openai_response("not json").unwrap_err();
        assert!(matches!(err, AdvisoryError::Malformed(_)));

        let err =
            parse_openai_response(r#"{"choices":[{"message":{"content":"   "}}]}"#).unwrap_err();
        assert!(matches!(err, AdvisoryError::EmptyResponse));

        let err =
            parse_openai_response(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap_err();
        assert!(matches!(err, AdvisoryError::EmptyResponse));
    }

    #[test]
    fn test_parse_ollama_response() {
        let body = r#"{"model":"llama3.2","message":{"role":"assistant","content":"Stay calm."},"done":true}"#;
        assert_eq!(parse_ollama_response(body).unwrap(), "Stay calm.");

        let err = parse_ollama_response(r#"{"error":"model not found"}"#).unwrap_err();
        assert!(matches!(err, AdvisoryError::Malformed(_)));
    }

    #[test]
    fn test_request_serialization() {
        let request = OpenAIRequest {
            model: "gpt-5",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "persona",
                },
                ChatMessage {
                    role: "user",
                    content: "question",
                },
            ],
            temperature: 0.4,
            max_tokens: 500,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-5");
        assert_eq!(value["max_tokens"], 500);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "question");
        assert!((value["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_disabled_short_circuits() {
        let config = LlmConfig {
            enabled: false,
            ..base_config()
        };
        let client = LlmClient::new(config).unwrap();
        let err = client.complete("s", "u", 500, 0.4).await.unwrap_err();
        assert!(matches!(err, AdvisoryError::Disabled));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let config = LlmConfig {
            api_key: None,
            ..base_config()
        };
        let client = LlmClient::new(config).unwrap();
        let err = client.complete("s", "u", 500, 0.4).await.unwrap_err();
        assert!(matches!(err, AdvisoryError::MissingApiKey(LlmProvider::OpenAI)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        // Nothing listens on the discard port locally.
        let config = base_config().with_endpoint("http://127.0.0.1:9/");
        let client = LlmClient::new(config).unwrap();
        let err = client.complete("s", "u", 500, 0.4).await.unwrap_err();
        assert!(
            matches!(err, AdvisoryError::Connection(_) | AdvisoryError::Timeout(_)),
            "unexpected error: {err}"
        );
    }
}
