//! Structured logging initialization.
//!
//! Uses the tracing crate; level comes from config with the `RUST_LOG`
//! environment variable taking precedence.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Call once at startup.
pub fn init(log_level: &str) {
    let default_filter = format!("relay_proxy={log_level},tower_http={log_level}");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
