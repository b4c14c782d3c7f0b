/// DeepSeek chat HTTP client implementation.
///
/// This module provides `ChatClient` for making synchronous requests to an
/// OpenAI-compatible chat-completions endpoint, along with error types and a
/// builder for configuration.
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::config::{DEFAULT_DEEPSEEK_BASE_URL, DEFAULT_DEEPSEEK_MODEL, EnvConfig};

/// Errors that can occur when talking to the chat API.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No API key was supplied by the builder or the environment.
    #[error("DEEPSEEK_API_KEY is not configured")]
    MissingApiKey,

    /// Invalid base URL configuration.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network-related errors (connection failures, DNS resolution, etc.)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// HTTP errors with status code.
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// Responses the endpoint returned but that lack the expected fields.
    #[error("Chat API error: {message}")]
    Api { message: String },
}

impl ChatError {
    /// Whether the error is a configuration problem rather than a transient
    /// or external one.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ChatError::MissingApiKey | ChatError::InvalidUrl(_))
    }
}

/// One role-tagged message in a chat exchange.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A completed chat exchange: the generated text plus token accounting.
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    pub content: String,
    pub total_tokens: u64,
}

/// Builder for constructing `ChatClient` instances.
///
/// # Examples
///
/// ```no_run
/// use trip_doctor::chat::ChatClientBuilder;
///
/// let client = ChatClientBuilder::new()
///     .api_key("sk-example")
///     .base_url("https://api.deepseek.com/v1")
///     .build()
///     .expect("Failed to create client");
/// ```
#[derive(Debug, Default)]
pub struct ChatClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
}

impl ChatClientBuilder {
    /// Creates a new `ChatClientBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder from resolved environment configuration.
    pub fn from_config(config: &EnvConfig) -> Self {
        ChatClientBuilder {
            api_key: config.deepseek_api_key.clone(),
            base_url: Some(config.deepseek_base_url.clone()),
            model: Some(config.deepseek_model.clone()),
        }
    }

    /// Sets the API key used as a bearer credential.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the base URL of the chat endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the model identifier sent with each request.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Builds the `ChatClient` with the configured settings.
    ///
    /// Values not set on the builder fall back to `DEEPSEEK_API_KEY`,
    /// `DEEPSEEK_API_BASE_URL`, and `DEEPSEEK_MODEL` in the environment, then
    /// to the deployment defaults. A missing API key is an error: the client
    /// never issues unauthenticated requests.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::MissingApiKey` when no key is available,
    /// `ChatError::InvalidUrl` when the base URL does not parse, and
    /// `ChatError::Network` when the underlying HTTP client cannot be built.
    pub fn build(self) -> Result<ChatClient, ChatError> {
        let api_key = match self.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => std::env::var("DEEPSEEK_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .ok_or(ChatError::MissingApiKey)?,
        };

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            std::env::var("DEEPSEEK_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_DEEPSEEK_BASE_URL.to_string())
        };

        let model = if let Some(m) = self.model {
            m
        } else {
            std::env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_DEEPSEEK_MODEL.to_string())
        };

        reqwest::Url::parse(&base_url)
            .map_err(|e| ChatError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(ChatError::Network)?;

        Ok(ChatClient {
            client,
            api_key,
            base_url,
            model,
        })
    }
}

/// Synchronous HTTP client for an OpenAI-compatible chat endpoint.
///
/// Construct via `ChatClientBuilder`. Requests are not retried: the client
/// backs the connection diagnostic, which needs the first failure surfaced
/// as-is.
pub struct ChatClient {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    model: String,
}

/// Trait for chat API operations.
///
/// This trait enables mocking in unit tests and keeps the connection check
/// independent of the concrete HTTP client.
pub trait ChatApi: Send + Sync {
    /// Sends role-tagged messages and returns the generated text plus the
    /// endpoint's token-usage count.
    fn chat_completion(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<ChatCompletion, ChatError>;
}

impl ChatClient {
    /// Returns the base URL configured for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the model identifier configured for this client.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn chat_completion_internal(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<ChatCompletion, ChatError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let request_body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .map_err(ChatError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Http {
                status: status.as_u16(),
            });
        }

        let json: serde_json::Value = response.json().map_err(ChatError::Network)?;

        let content = json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| ChatError::Api {
                message: "Missing choices[0].message.content in API response".to_string(),
            })?;

        let total_tokens = json
            .get("usage")
            .and_then(|u| u.get("total_tokens"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0);

        Ok(ChatCompletion {
            content,
            total_tokens,
        })
    }
}

impl ChatApi for ChatClient {
    fn chat_completion(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<ChatCompletion, ChatError> {
        self.chat_completion_internal(messages, max_tokens, temperature)
    }
}
