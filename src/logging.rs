//! Log setup for the binary.
//!
//! The game owns the terminal, so logs never go to stdout or stderr. When a
//! log path is configured, a `tracing-subscriber` fmt layer appends plain-text
//! lines to that file, filtered by `RUST_LOG` (default `info`).

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `path`.
///
/// Returns `Ok(false)` without installing anything when `path` is `None`.
pub fn init(path: Option<&str>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    Ok(true)
}
