//! File and JSON round-trip probes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::logger::Logger;
use crate::runner::CheckStatus;

const PROBE_TEXT: &str = "trip-doctor file round-trip probe";

/// Writes known text to a temp file, reads it back, and compares.
///
/// The probe file lives in its own temp directory and is removed before the
/// content comparison, so it is gone whether or not the contents match; the
/// directory itself is cleaned up on drop even when an I/O step fails.
pub fn file_round_trip(logger: &Logger) -> Result<CheckStatus> {
    let dir = tempfile::tempdir().context("failed to create temp directory")?;
    let status = round_trip_at(&dir.path().join("probe.txt"))?;
    if status == CheckStatus::Ok {
        logger.info("file write/read/delete round-trip succeeded");
    }
    Ok(status)
}

pub(crate) fn round_trip_at(path: &Path) -> Result<CheckStatus> {
    fs::write(path, PROBE_TEXT).context("failed to write probe file")?;
    let read_back = fs::read_to_string(path).context("failed to read probe file")?;
    fs::remove_file(path).context("failed to remove probe file")?;

    if read_back == PROBE_TEXT {
        Ok(CheckStatus::Ok)
    } else {
        Ok(CheckStatus::Failed(
            "file content did not survive the round-trip".to_string(),
        ))
    }
}

/// Encodes a nested structure to JSON and decodes it back.
pub fn json_round_trip(logger: &Logger) -> Result<CheckStatus> {
    let original = serde_json::json!({
        "region": "Urumqi",
        "days": 3,
        "attractions": [
            {"name": "Tianshan Tianchi", "rating": 4.5},
            {"name": "Xinjiang Regional Museum", "rating": 4.3}
        ]
    });

    let encoded = serde_json::to_string_pretty(&original).context("failed to encode JSON")?;
    let decoded: serde_json::Value =
        serde_json::from_str(&encoded).context("failed to decode JSON")?;

    if decoded != original {
        return Ok(CheckStatus::Failed(
            "decoded JSON differs from the original".to_string(),
        ));
    }

    logger.info(&format!(
        "json round-trip succeeded ({} bytes encoded)",
        encoded.len()
    ));
    Ok(CheckStatus::Ok)
}
