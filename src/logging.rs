//! Diagnostic logging setup.
//!
//! Events go to stderr without colour so they can be redirected
//! (`RUST_LOG=debug tui-showcase 2>trace.log`) without mixing escape codes
//! into the log. `RUST_LOG` wins over the built-in filter.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
