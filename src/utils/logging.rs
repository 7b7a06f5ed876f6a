//! Structured logging setup.
//!
//! The codecs only emit `tracing` events. Applications that want to see them
//! install a subscriber once at startup with [`init_logging`].

use crate::config::LoggingConfig;
use tracing::info;

/// Install a global `fmt` subscriber configured from `config`.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is left in place.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(true);

    let installed = if config.json_format {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        info!(app = %config.app_name, level = %config.log_level, "logging initialized");
    }
    installed
}
