//! Async runtime probe.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::logger::Logger;
use crate::runner::CheckStatus;

const SLEEP_DURATION: Duration = Duration::from_millis(100);

/// Builds a current-thread runtime and drives one sleep to completion.
///
/// The sleep has no interaction with the other checks; it only proves the
/// async runtime can park and wake a task.
pub fn async_sleep(logger: &Logger) -> Result<CheckStatus> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build async runtime")?;

    let started = Instant::now();
    runtime.block_on(async {
        tokio::time::sleep(SLEEP_DURATION).await;
    });
    let elapsed = started.elapsed();

    logger.info(&format!(
        "async sleep completed in {} ms",
        elapsed.as_millis()
    ));
    Ok(CheckStatus::Ok)
}
