//! Environment configuration for the diagnostic suites.
//!
//! Configuration comes from the process environment, optionally seeded from a
//! `.env` file in the working directory. Variables already present in the
//! environment win over `.env` entries, and missing optional values fall back
//! to the defaults the travel-assistant deployment ships with.

use std::env;

/// Default DeepSeek chat-completions endpoint.
pub const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";
/// Default chat model identifier.
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";
/// Default AMap MCP geolocation endpoint.
pub const DEFAULT_AMAP_BASE_URL: &str = "http://localhost:8080/mcp";

/// Resolved environment configuration.
///
/// `deepseek_api_key` is required by the api suite and optional everywhere
/// else; `amap_api_key` is always optional (the assistant falls back to
/// simulated geolocation data without it).
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub deepseek_api_key: Option<String>,
    pub deepseek_base_url: String,
    pub deepseek_model: String,
    pub amap_api_key: Option<String>,
    pub amap_base_url: String,
}

impl EnvConfig {
    /// Loads configuration, applying a `.env` file first when one exists.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Reads configuration from the process environment without touching `.env`.
    pub fn from_env() -> Self {
        EnvConfig {
            deepseek_api_key: non_empty(env::var("DEEPSEEK_API_KEY").ok()),
            deepseek_base_url: env::var("DEEPSEEK_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_DEEPSEEK_BASE_URL.to_string()),
            deepseek_model: env::var("DEEPSEEK_MODEL")
                .unwrap_or_else(|_| DEFAULT_DEEPSEEK_MODEL.to_string()),
            amap_api_key: non_empty(env::var("AMAP_MCP_API_KEY").ok()),
            amap_base_url: env::var("AMAP_MCP_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_AMAP_BASE_URL.to_string()),
        }
    }

    /// Whether the required chat API credential is configured.
    pub fn has_deepseek_key(&self) -> bool {
        self.deepseek_api_key.is_some()
    }
}

/// Treats empty and whitespace-only values as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
