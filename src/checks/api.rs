//! Chat API, token-counting, and prompt-generation probes.

use std::time::Instant;

use anyhow::{Context, Result};

use crate::chat::{ChatApi, ChatClientBuilder, ChatMessage};
use crate::config::EnvConfig;
use crate::logger::Logger;
use crate::prompt::{self, PROMPT_TOKEN_BUDGET};
use crate::runner::CheckStatus;
use crate::tokens::TokenCounter;

const PROBE_SYSTEM_PROMPT: &str = "You are a connectivity probe. Reply briefly.";
const PROBE_USER_PROMPT: &str =
    "Reply with 'connection test successful' to confirm the API works.";
const PROBE_MAX_TOKENS: u32 = 50;
const PROBE_TEMPERATURE: f32 = 0.1;

const TOKEN_PROBE_TEXT: &str =
    "A short probe sentence used to verify that token counting works.";

/// Sends one fixed chat exchange through the configured endpoint.
///
/// A missing API key is a configuration error: the check fails immediately
/// and no network call is attempted.
pub fn chat_connection(logger: &Logger, config: &EnvConfig) -> Result<CheckStatus> {
    if !config.has_deepseek_key() {
        return Ok(CheckStatus::Failed(
            "DEEPSEEK_API_KEY is not configured; connection not attempted".to_string(),
        ));
    }

    let client = match ChatClientBuilder::from_config(config).build() {
        Ok(client) => client,
        Err(e) if e.is_configuration() => {
            return Ok(CheckStatus::Failed(format!("configuration error: {}", e)));
        }
        Err(e) => {
            return Ok(CheckStatus::Failed(format!(
                "failed to build chat client: {}",
                e
            )));
        }
    };

    logger.info(&format!(
        "connecting to {} with model {}",
        client.base_url(),
        client.model()
    ));
    connection_probe(logger, &client)
}

/// The exchange itself, against any `ChatApi` implementation.
pub fn connection_probe(logger: &Logger, client: &dyn ChatApi) -> Result<CheckStatus> {
    let messages = [
        ChatMessage::system(PROBE_SYSTEM_PROMPT),
        ChatMessage::user(PROBE_USER_PROMPT),
    ];

    let started = Instant::now();
    match client.chat_completion(&messages, PROBE_MAX_TOKENS, PROBE_TEMPERATURE) {
        Ok(completion) => {
            let elapsed = started.elapsed();
            logger.info(&format!("response: {}", completion.content.trim()));
            logger.info(&format!("response time: {:.2} s", elapsed.as_secs_f64()));
            logger.info(&format!("token usage: {}", completion.total_tokens));
            Ok(CheckStatus::Ok)
        }
        Err(e) => Ok(CheckStatus::Failed(format!(
            "chat completion failed: {}",
            e
        ))),
    }
}

/// Counts the tokens of a fixed probe text.
///
/// The tokenizer is optional for the basic suite (`required = false`, a
/// missing encoder only warns) and mandatory for the api suite.
pub fn token_counting(logger: &Logger, required: bool) -> Result<CheckStatus> {
    let counter = match TokenCounter::cl100k() {
        Ok(counter) => counter,
        Err(e) if required => return Ok(CheckStatus::Failed(e.to_string())),
        Err(e) => {
            return Ok(CheckStatus::Warning(format!(
                "{}; skipping token counting",
                e
            )));
        }
    };

    let count = counter.count(TOKEN_PROBE_TEXT);
    if count == 0 {
        return Ok(CheckStatus::Failed(
            "probe text encoded to zero tokens".to_string(),
        ));
    }

    logger.info(&format!("probe text: {}", TOKEN_PROBE_TEXT));
    logger.info(&format!(
        "token count: {} ({})",
        count,
        counter.encoding_name()
    ));
    Ok(CheckStatus::Ok)
}

/// Generates the travel-planning prompt from fixture data and sizes it
/// against the token budget.
pub fn prompt_generation(logger: &Logger) -> Result<CheckStatus> {
    let region = prompt::sample_region();
    let preferences = prompt::sample_preferences();
    let text = prompt::planning_prompt(&region, &preferences, 3);

    let counter = TokenCounter::cl100k().context("tokenizer required for prompt sizing")?;
    let tokens = counter.count(&text);

    logger.info(&format!(
        "prompt generated: {} characters",
        text.chars().count()
    ));
    logger.info(&format!("token count: {}", tokens));

    if tokens > PROMPT_TOKEN_BUDGET {
        return Ok(CheckStatus::Warning(format!(
            "prompt is large: {} tokens (budget {})",
            tokens, PROMPT_TOKEN_BUDGET
        )));
    }
    Ok(CheckStatus::Ok)
}
