pub mod chat;
pub mod checks;
pub mod config;
pub mod logger;
pub mod prompt;
pub mod runner;
pub mod tokens;

pub use chat::{ChatApi, ChatClient, ChatClientBuilder, ChatCompletion, ChatError, ChatMessage};
pub use config::EnvConfig;
pub use logger::Logger;
pub use runner::{Check, CheckRecord, CheckStatus, Readiness, Report, RunnerConfig};
