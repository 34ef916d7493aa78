// tests/support/helpers.rs
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,article_kit=debug".into());
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
