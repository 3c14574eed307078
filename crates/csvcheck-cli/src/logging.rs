//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Verbosity comes from the CLI flags; when no flag is given, the
//! `RUST_LOG` environment variable takes over.

use std::io::{self, IsTerminal};

use anyhow::anyhow;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter derived from CLI verbosity flags.
    pub level_filter: LevelFilter,
    /// Prefer `RUST_LOG` when the CLI left verbosity untouched.
    pub use_env_filter: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: io::stderr().is_terminal(),
        }
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level_filter.to_string()))
    } else {
        EnvFilter::new(config.level_filter.to_string())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(config.with_ansi)
        .try_init()
        .map_err(|error| anyhow!("failed to set global subscriber: {error}"))
}
