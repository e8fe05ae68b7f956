//! Logging setup

use tracing_subscriber::EnvFilter;

use crate::config::ConfigError;

/// Build the filter: `RUST_LOG` when set, otherwise `fallback`
pub fn build_filter(fallback: &str) -> Result<EnvFilter, ConfigError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback)
            .map_err(|e| ConfigError::Validation(format!("invalid log_level '{}': {}", fallback, e))),
    }
}

/// Install the global fmt subscriber, writing to stderr
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(fallback: &str) -> Result<bool, ConfigError> {
    let filter = build_filter(fallback)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    Ok(installed)
}
