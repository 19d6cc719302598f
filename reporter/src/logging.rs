//! Logging setup.
//!
//! Logs go to stderr so stdout carries only the report. The level comes from
//! `RUST_LOG` (e.g. `RUST_LOG=staff_reporter=debug`) and defaults to `warn`.
//! The CLI installs the subscriber after reading the env file, so `RUST_LOG`
//! may be set there too.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber for the CLI.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Verbose subscriber for tests.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
