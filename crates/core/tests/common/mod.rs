//! Shared setup for integration tests
//!
//! Installs a `tracing` subscriber once per test binary so that
//! `RUST_LOG=grids_core=trace cargo test` shows library logs.

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
