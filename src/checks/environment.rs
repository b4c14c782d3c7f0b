//! Host and environment-variable probes.

use std::env;

use anyhow::Result;

use crate::config::EnvConfig;
use crate::logger::Logger;
use crate::runner::CheckStatus;

/// Generic OS variables checked for presence only.
const OS_VARS: [&str; 3] = ["PATH", "HOME", "USER"];

/// Reports the binary version and the host platform. Always passes.
pub fn host_info(logger: &Logger) -> Result<CheckStatus> {
    logger.info(&format!("trip-doctor {}", env!("CARGO_PKG_VERSION")));
    logger.info(&format!("host: {} {}", env::consts::OS, env::consts::ARCH));
    match env::current_exe() {
        Ok(path) => logger.info(&format!("binary: {}", path.display())),
        Err(_) => logger.warn("binary path unavailable"),
    }
    Ok(CheckStatus::Ok)
}

/// Presence check for generic OS variables plus a configured/simulated
/// report for the project credentials. Missing OS variables downgrade the
/// check to a warning, never a failure.
pub fn env_vars(logger: &Logger, config: &EnvConfig) -> Result<CheckStatus> {
    let mut missing = Vec::new();

    for var in OS_VARS {
        if env::var_os(var).is_some_and(|v| !v.is_empty()) {
            logger.info(&format!("{}: set", var));
        } else {
            missing.push(var);
        }
    }

    match dirs::home_dir() {
        Some(dir) => logger.info(&format!("home directory: {}", dir.display())),
        None => missing.push("home directory"),
    }

    report_project_key(logger, "DEEPSEEK_API_KEY", config.has_deepseek_key());
    report_project_key(logger, "AMAP_MCP_API_KEY", config.amap_api_key.is_some());

    if missing.is_empty() {
        Ok(CheckStatus::Ok)
    } else {
        Ok(CheckStatus::Warning(format!(
            "not set: {}",
            missing.join(", ")
        )))
    }
}

fn report_project_key(logger: &Logger, name: &str, configured: bool) {
    if configured {
        logger.info(&format!("{}: configured", name));
    } else {
        logger.info(&format!("{}: not configured (simulated mode)", name));
    }
}

/// Credential check for the api suite: the chat API key is required, the
/// geolocation key optional. Logs the resolved endpoints either way.
pub fn api_config(logger: &Logger, config: &EnvConfig) -> Result<CheckStatus> {
    logger.info(&format!("chat endpoint: {}", config.deepseek_base_url));
    logger.info(&format!("chat model: {}", config.deepseek_model));
    logger.info(&format!("geolocation endpoint: {}", config.amap_base_url));

    if !config.has_deepseek_key() {
        return Ok(CheckStatus::Failed("DEEPSEEK_API_KEY is not set".to_string()));
    }
    logger.info("DEEPSEEK_API_KEY: configured");

    if config.amap_api_key.is_none() {
        return Ok(CheckStatus::Warning(
            "AMAP_MCP_API_KEY is not set; geolocation will use simulated data".to_string(),
        ));
    }
    logger.info("AMAP_MCP_API_KEY: configured");

    Ok(CheckStatus::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(deepseek: Option<&str>, amap: Option<&str>) -> EnvConfig {
        EnvConfig {
            deepseek_api_key: deepseek.map(String::from),
            deepseek_base_url: "https://api.deepseek.com/v1".to_string(),
            deepseek_model: "deepseek-chat".to_string(),
            amap_api_key: amap.map(String::from),
            amap_base_url: "http://localhost:8080/mcp".to_string(),
        }
    }

    #[test]
    fn host_info_always_passes() {
        let status = host_info(&Logger::plain()).unwrap();
        assert_eq!(status, CheckStatus::Ok);
    }

    #[test]
    fn env_vars_never_fails_outright() {
        // Whatever this machine has set, missing OS variables are at most a
        // warning and the check still counts as passed.
        let status = env_vars(&Logger::plain(), &config_with(None, None)).unwrap();
        assert!(status.passed());
    }

    #[test]
    fn api_config_fails_without_the_required_key() {
        let status = api_config(&Logger::plain(), &config_with(None, Some("amap"))).unwrap();
        match status {
            CheckStatus::Failed(reason) => assert!(reason.contains("DEEPSEEK_API_KEY")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn api_config_warns_without_the_optional_key() {
        let status = api_config(&Logger::plain(), &config_with(Some("sk-x"), None)).unwrap();
        match status {
            CheckStatus::Warning(reason) => assert!(reason.contains("AMAP_MCP_API_KEY")),
            other => panic!("expected Warning, got {:?}", other),
        }
        assert!(
            api_config(&Logger::plain(), &config_with(Some("sk-x"), None))
                .unwrap()
                .passed()
        );
    }

    #[test]
    fn api_config_passes_with_both_keys() {
        let status = api_config(&Logger::plain(), &config_with(Some("sk-x"), Some("amap"))).unwrap();
        assert_eq!(status, CheckStatus::Ok);
    }
}
