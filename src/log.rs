//! Logging utilities

use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

/// Initialise the global tracing subscriber.
///
/// Everything goes to stderr; stdout is reserved for the volume report.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_env("ALSAVOL_LOG")
        .unwrap_or_default()
        .add_directive(LevelFilter::WARN.into());

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
