//! Structured logging setup
//!
//! Installs a `tracing` subscriber for the embedding application. `RUST_LOG`
//! takes precedence; otherwise the crate logs at the requested level.

use crate::{Error, Result};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Compact output without uptime timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogStyle {
    #[default]
    Standard,
    Quiet,
}

/// Set up structured logging at the given level ("error".."trace")
pub fn init_logging(level: &str) -> Result<()> {
    init_logging_with_style(level, LogStyle::Standard)
}

/// Set up structured logging with an explicit output style
///
/// Fails with a configuration error when the level is unknown or a global
/// subscriber is already installed.
pub fn init_logging_with_style(level: &str, style: LogStyle) -> Result<()> {
    let level = normalize_level(level)?;

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("health_climate={}", level)));

    let installed = match style {
        LogStyle::Quiet => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init(),
        LogStyle::Standard => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| Error::configuration(format!("Logging already initialised: {}", e)))?;

    debug!("Logging initialized at level: {}", level);
    Ok(())
}

/// Lowercase a level name and reject anything `tracing` does not know
pub fn normalize_level(level: &str) -> Result<String> {
    let level = level.trim().to_lowercase();
    match level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" | "off" => Ok(level),
        _ => Err(Error::configuration(format!(
            "Unknown log level '{}': expected error, warn, info, debug, trace or off",
            level
        ))),
    }
}
