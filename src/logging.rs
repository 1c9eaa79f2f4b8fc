//! Tracing subscriber setup for the `fret` binary.
//!
//! Events go to stderr so that stdout stays a clean report. The filter is read
//! from `FRET_LOG` (EnvFilter syntax, e.g. `fret_geometry=debug`) and defaults
//! to `warn`.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const LOG_ENV: &str = "FRET_LOG";
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Fails if one is already installed.
pub fn init() -> Result<(), AppError> {
    let directives = std::env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::new(1, format!("Failed to initialise logging: {e}")))
}

/// Parse `directives`, falling back to `DEFAULT_FILTER` when absent or invalid.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
