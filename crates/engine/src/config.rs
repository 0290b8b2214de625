//! Runtime configuration from environment variables and command-line flags.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `SNAKE_TICK_MS` | `--tick-ms <n>` | 300 |
//! | `SNAKE_SEED` | `--seed <n>` | unset (thread RNG) |
//! | `SNAKE_LOG_PATH` | `--log <path>` | unset (no logging) |
//!
//! Flags override the environment.

use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeConfig {
    pub tick_ms: u32,
    /// Seed for the deterministic food RNG; `None` draws from the thread RNG.
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    /// Environment variables that were set but could not be used.
    pub ignored: Vec<&'static str>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
            ignored: Vec::new(),
        }
    }
}

impl SnakeConfig {
    /// Create from environment variables.
    ///
    /// Values that fail to parse fall back to the default and are recorded
    /// in `ignored`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SnakeConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(raw) = lookup("SNAKE_TICK_MS") {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => cfg.tick_ms = ms,
                _ => cfg.ignored.push("SNAKE_TICK_MS"),
            }
        }

        if let Some(raw) = lookup("SNAKE_SEED") {
            match raw.trim().parse::<u32>() {
                Ok(seed) => cfg.seed = Some(seed),
                Err(_) => cfg.ignored.push("SNAKE_SEED"),
            }
        }

        cfg.log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        cfg
    }

    /// Apply command-line flags on top of `self`.
    ///
    /// `args` excludes the program name.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--tick-ms" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --tick-ms"))?;
                    let ms = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --tick-ms value: {}", v))?;
                    if ms == 0 {
                        return Err(anyhow!("--tick-ms must be greater than zero"));
                    }
                    self.tick_ms = ms;
                }
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = Some(
                        v.parse::<u32>()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(v.clone());
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    /// Log the effective settings and any ignored environment values.
    pub fn log_summary(&self) {
        for var in &self.ignored {
            warn!(var = *var, "ignoring unparseable environment value");
        }
        info!(tick_ms = self.tick_ms, seed = ?self.seed, "configuration loaded");
    }
}
