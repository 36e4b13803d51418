//! Tracing bootstrap for the scenario suites.

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber once; later calls are no-ops.
///
/// Honors `RUST_LOG`, defaulting to `info`. Output goes through the test
/// writer so the harness captures it per test.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
