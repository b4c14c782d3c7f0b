//! Capability probes.
//!
//! A declarative list of capabilities evaluated uniformly by one check. Each
//! entry names the capability, says whether the travel assistant requires it,
//! and carries a probe proving it works. A missing required capability fails
//! the check; missing optional capabilities only produce a warning.

use anyhow::Result;

use crate::logger::Logger;
use crate::runner::CheckStatus;
use crate::tokens::TokenCounter;

/// One capability of the runtime environment.
pub struct Capability {
    pub name: &'static str,
    pub required: bool,
    probe: fn() -> Result<String, String>,
}

impl Capability {
    /// Runs the probe, returning the providing component on success or the
    /// failure reason.
    pub fn probe(&self) -> Result<String, String> {
        (self.probe)()
    }
}

/// The capability table, in report order.
pub fn capabilities() -> Vec<Capability> {
    vec![
        Capability {
            name: "json codec",
            required: true,
            probe: probe_json,
        },
        Capability {
            name: "temp files",
            required: true,
            probe: probe_temp_files,
        },
        Capability {
            name: "async runtime",
            required: true,
            probe: probe_async_runtime,
        },
        Capability {
            name: "http client",
            required: false,
            probe: probe_http_client,
        },
        Capability {
            name: "tokenizer",
            required: false,
            probe: probe_tokenizer,
        },
    ]
}

fn probe_json() -> Result<String, String> {
    let value = serde_json::json!({"probe": true});
    serde_json::to_string(&value)
        .map(|_| "serde_json".to_string())
        .map_err(|e| e.to_string())
}

fn probe_temp_files() -> Result<String, String> {
    tempfile::tempdir()
        .map(|_| "tempfile".to_string())
        .map_err(|e| e.to_string())
}

fn probe_async_runtime() -> Result<String, String> {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .map(|_| "tokio".to_string())
        .map_err(|e| e.to_string())
}

fn probe_http_client() -> Result<String, String> {
    reqwest::blocking::Client::builder()
        .build()
        .map(|_| "reqwest".to_string())
        .map_err(|e| e.to_string())
}

fn probe_tokenizer() -> Result<String, String> {
    TokenCounter::cl100k()
        .map(|counter| counter.encoding_name().to_string())
        .map_err(|e| e.to_string())
}

/// Evaluates every capability in order.
pub fn probe_all(logger: &Logger) -> Result<CheckStatus> {
    let mut missing_required = Vec::new();
    let mut missing_optional = Vec::new();

    for capability in capabilities() {
        match capability.probe() {
            Ok(provider) => {
                logger.info(&format!("{}: available ({})", capability.name, provider));
            }
            Err(reason) if capability.required => {
                logger.error(&format!("{}: unavailable: {}", capability.name, reason));
                missing_required.push(capability.name);
            }
            Err(reason) => {
                logger.warn(&format!(
                    "{}: unavailable (optional): {}",
                    capability.name, reason
                ));
                missing_optional.push(capability.name);
            }
        }
    }

    if !missing_required.is_empty() {
        return Ok(CheckStatus::Failed(format!(
            "required capabilities unavailable: {}",
            missing_required.join(", ")
        )));
    }
    if !missing_optional.is_empty() {
        return Ok(CheckStatus::Warning(format!(
            "optional capabilities unavailable: {}",
            missing_optional.join(", ")
        )));
    }
    Ok(CheckStatus::Ok)
}
