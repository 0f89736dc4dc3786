//! Tracing setup for hosts embedding the calculator.

use anyhow::Result;
use shared::ChangeCalculatorConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log filter directive for the given configuration
pub fn log_filter(config: &ChangeCalculatorConfig) -> &'static str {
    if config.enable_debug_logging {
        "debug"
    } else {
        "info"
    }
}

/// Install a global fmt subscriber.
///
/// Returns `Ok(false)` without touching anything if a global subscriber is
/// already set, so hosts and tests may call this more than once.
pub fn init_logging(config: &ChangeCalculatorConfig) -> Result<bool> {
    let filter = EnvFilter::try_new(log_filter(config))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        info!("Logging initialized at level {}", log_filter(config));
    }
    Ok(installed)
}
