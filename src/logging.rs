// Console logging
// Installs a tracing-subscriber backend for the `log` facade

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
pub fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr log backend.
///
/// `log` records reach the subscriber through its tracing-log bridge.
/// Returns false when a global backend was already installed.
pub fn init_console_logging() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(console_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
