//! Tracing subscriber setup for hosts that do not install their own

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Filter directive scoping `config.level` to this crate, e.g. `alert_state=debug`.
pub fn filter_directive(config: &LoggingConfig) -> String {
    format!("alert_state={}", config.level.to_lowercase())
}

/// Install a fmt subscriber for this crate's events.
///
/// Returns `false` when a global subscriber was already set, in which case the existing
/// one is left in place.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::new(filter_directive(config));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .is_ok()
}
