/// DeepSeek chat HTTP client module.
///
/// This module provides a synchronous client for an OpenAI-compatible
/// chat-completions endpoint, with builder configuration, environment-variable
/// fallbacks, and typed errors.
mod client;

pub use client::{
    ChatApi, ChatClient, ChatClientBuilder, ChatCompletion, ChatError, ChatMessage,
};
