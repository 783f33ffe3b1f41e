//! Logging init: `tracing` fmt subscriber on stderr.
//!
//! The library itself only emits events; installing a subscriber is left to
//! the embedding application, which may call [`init_logging`] once at startup.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// `RUST_LOG` when set and valid, otherwise the configured directive.
pub fn env_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.filter))
}

/// Install the global subscriber, writing to stderr.
/// Returns Err if a global subscriber is already set.
pub fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(std::io::stderr)
        .with_ansi(cfg.ansi)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!(filter = %cfg.filter, "urlrel logging initialized");
    Ok(())
}
