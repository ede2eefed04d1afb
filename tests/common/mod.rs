#![allow(dead_code)]

pub mod asserts;
pub mod builders;
pub mod headers;

/// Installs a test-writer subscriber so filter logs show up with
/// `RUST_LOG=cors_filter=debug`. Safe to call from every test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
