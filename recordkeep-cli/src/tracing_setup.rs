//! Console logging for the recordkeep binary
//!
//! The default filter is `info` (or `debug` with `--debug`) for the apps and
//! request traces, with sqlx statement logging held at `warn`. `RUST_LOG`
//! replaces the default entirely, e.g. `RUST_LOG=sqlx=info,tower_http=debug`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Raise the default level to debug
    pub debug: bool,
}

impl TracingConfig {
    fn default_directives(&self) -> &'static str {
        if self.debug {
            "debug,sqlx=warn"
        } else {
            "info,sqlx=warn"
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directives()))
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {}", err))
}
