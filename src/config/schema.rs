//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal config is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Content-based route: predicate literal and the two destinations.
    pub route: RouteConfig,

    /// Retry configuration for the fault-tolerance layer.
    pub retries: RetryConfig,

    /// Timeout configuration for the inbound adapter.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Content-based routing configuration.
///
/// A request whose body equals `body_equals` is sent to `if_url`; any other
/// body, or any body when `body_equals` is unset, goes to `else_url`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Body literal selecting the if-destination. Unset means every request
    /// goes to `else_url`.
    pub body_equals: Option<String>,

    /// Destination when the body matches.
    pub if_url: String,

    /// Destination when the body does not match (or no literal is set).
    pub else_url: String,

    /// Maximum request body size captured for inspection and forwarding.
    pub max_body_bytes: usize,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            body_equals: Some("hello world".to_string()),
            if_url: "http://localhost:8090".to_string(),
            else_url: "http://localhost:8091".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempt count, including the first (must be at least 1).
    pub max_attempts: u32,

    /// Base delay for linear backoff in milliseconds; the pause after
    /// failed attempt `i` is `i × base_delay_ms`.
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 1000,
        }
    }
}

/// Timeout configuration for the inbound adapter.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for one inbound exchange, in seconds. Covers the
    /// whole pipeline traversal including retry backoff.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Install the request-logging decorator.
    pub agent_log_enabled: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            agent_log_enabled: true,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
