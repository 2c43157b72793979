// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing setup and local runtime discovery for integration tests.

use klir::runtime::{BollardRuntime, RuntimeConfig, connect};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("klir=debug".parse().expect("valid directive"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Connect to the local runtime, or `None` when there is no usable daemon.
pub async fn local_runtime() -> Option<BollardRuntime> {
    init_tracing();
    connect(&RuntimeConfig::default()).await.ok()
}
