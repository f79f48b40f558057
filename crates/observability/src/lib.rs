//! Process-wide logging setup for the binaries.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber: JSON lines on stdout, filtered
/// through `RUST_LOG` (default `info`).
///
/// Calling this more than once is harmless; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
