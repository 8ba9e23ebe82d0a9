//! Log file setup.
//!
//! The TUI owns the terminal, so diagnostics go to a non-blocking
//! daily-rolling file under ${GATEHOUSE_HOME}/logs. Filtering follows the
//! GATEHOUSE_LOG environment variable (EnvFilter syntax); logging is off
//! when the variable is unset.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes the global tracing subscriber.
///
/// Returns the worker guard that flushes buffered log lines on drop; keep it
/// alive for the lifetime of the process.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&dir, "gatehouse.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env("GATEHOUSE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
