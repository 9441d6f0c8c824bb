//! Logging setup
//!
//! Installs a global `tracing` subscriber writing to stderr. The filter is
//! read from `EXITPASS_LOG` (same syntax as `RUST_LOG`, default `info`) and
//! the output format from `EXITPASS_LOG_FORMAT` (`plain` or `json`).

use exitpass_domain::constants::{ENV_LOG_FILTER, ENV_LOG_FORMAT};
use exitpass_domain::{ExitPassError, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

exitpass_domain::impl_domain_enum_conversions!(LogFormat {
    Plain => "plain",
    Json => "json",
});

impl LogFormat {
    /// Format from `EXITPASS_LOG_FORMAT`, falling back to plain.
    pub fn from_env() -> Self {
        std::env::var(ENV_LOG_FORMAT).ok().and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

/// Build the filter from `EXITPASS_LOG`, or `default` when unset.
///
/// # Errors
/// Returns `ExitPassError::Config` for an unparsable directive.
pub fn env_filter(default: &str) -> Result<EnvFilter> {
    match std::env::var(ENV_LOG_FILTER) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives.trim())
            .map_err(|e| ExitPassError::Config(format!("Invalid {ENV_LOG_FILTER}: {e}"))),
        _ => EnvFilter::try_new(default)
            .map_err(|e| ExitPassError::Config(format!("Invalid default log filter: {e}"))),
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Returns `ExitPassError::Config` if the filter is invalid or a global
/// subscriber is already installed.
pub fn init_logging(format: LogFormat) -> Result<()> {
    let filter = env_filter(DEFAULT_FILTER)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Plain => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };

    installed.map_err(|e| ExitPassError::Config(format!("Failed to install logger: {e}")))?;
    tracing::debug!(format = %format, "logging initialized");
    Ok(())
}
