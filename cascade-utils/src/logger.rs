//! Logging setup.
//!
//! Library code logs through the `log` facade and `tracing` spans. Hosts that
//! do not bring their own subscriber can call [`try_init`].

use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber that also receives `log` records.
///
/// `RUST_LOG` wins over `default_filter` when it is set. Output goes to
/// stdout. Returns `false` if a global subscriber was already installed.
pub fn try_init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        log::debug!("Logger installed with default filter `{default_filter}`");
    }
    installed
}
