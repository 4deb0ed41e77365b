//! CLI argument parsing and logging setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, writing to stderr.
///
/// An invalid filter directive falls back to the default level.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid log filter '{filter}': {e}");
        EnvFilter::new(sysctl_apply::constants::DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
