//! Diagnostic check suites.
//!
//! Each probe is an independent leaf operation with no shared state and no
//! retries. The suite builders return the ordered check lists the runner
//! executes:
//!
//! - `basic_suite` - offline environment diagnostics, no credentials needed
//! - `api_suite` - live chat API connection diagnostics

pub mod api;
pub mod capability;
pub mod environment;
pub mod io;
pub mod runtime;

use crate::config::EnvConfig;
use crate::runner::Check;

/// Pass threshold the basic suite ships with.
pub const BASIC_PASS_THRESHOLD: f64 = 0.85;
/// Pass threshold the api suite ships with: every check must pass.
pub const API_PASS_THRESHOLD: f64 = 1.0;

/// Offline environment diagnostics, in fixed order.
pub fn basic_suite(config: &EnvConfig) -> Vec<Check> {
    let env_config = config.clone();
    vec![
        Check::new("host environment", environment::host_info),
        Check::new("capabilities", capability::probe_all),
        Check::new("token counting", |logger| {
            api::token_counting(logger, false)
        }),
        Check::new("async support", runtime::async_sleep),
        Check::new("json round-trip", io::json_round_trip),
        Check::new("environment variables", move |logger| {
            environment::env_vars(logger, &env_config)
        }),
        Check::new("file operations", io::file_round_trip),
    ]
}

/// Chat API connection diagnostics, in fixed order.
pub fn api_suite(config: &EnvConfig) -> Vec<Check> {
    let for_env = config.clone();
    let for_connection = config.clone();
    vec![
        Check::new("environment config", move |logger| {
            environment::api_config(logger, &for_env)
        }),
        Check::new("chat api connection", move |logger| {
            api::chat_connection(logger, &for_connection)
        }),
        Check::new("token counting", |logger| api::token_counting(logger, true)),
        Check::new("prompt generation", api::prompt_generation),
    ]
}
