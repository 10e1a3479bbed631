//! Outbound request pipeline subsystem.
//!
//! # Data Flow
//! ```text
//! server adapter builds OutboundRequest
//!     → outermost decorator (last in the compose list)
//!     → … inner decorators …
//!     → innermost decorator (first in the compose list)
//!     → base transport (HttpTransport)
//!     → response flows back outward unchanged
//! ```
//!
//! # Design Decisions
//! - `Client` is a stateless capability: no identity beyond behavior, safe
//!   to share across unbounded concurrent calls behind an `Arc`
//! - Decorators are plain client-to-client functions; composition is an
//!   ordered fold, not dispatch through a registry
//! - Compose order is load-bearing: callers list decorators innermost-first

pub mod error;
pub mod logging;
pub mod matching;
pub mod proxy;
pub mod request;
pub mod retry;
pub mod transport;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::RelayConfig;

pub use error::{PipelineError, PipelineResult};
pub use logging::{logging, LogSink, TracingSink, WriterSink};
pub use matching::MatchDirector;
pub use proxy::{proxy, Director};
pub use request::{OutboundRequest, RequestBody};
pub use retry::fault_tolerance;
pub use transport::HttpTransport;

/// Response produced by the transport; opaque to every decorator.
pub type ClientResponse = axum::response::Response;

/// Capability to perform one outbound request and yield a response or a
/// failure.
#[async_trait]
pub trait Client: Send + Sync {
    async fn perform(&self, req: &mut OutboundRequest) -> PipelineResult<ClientResponse>;
}

/// A client shared across the pipeline and all in-flight calls.
pub type SharedClient = Arc<dyn Client>;

/// A transformation that wraps one concern around a client without altering
/// its contract.
pub type Decorator = Box<dyn FnOnce(SharedClient) -> SharedClient + Send>;

/// Build one pipeline client from a base client and an ordered decorator
/// list.
///
/// The first decorator in the list wraps the base directly (innermost, runs
/// last before the transport); the last decorator becomes the outermost
/// layer and runs first. No decorator is skipped or reordered.
pub fn compose(base: SharedClient, decorators: Vec<Decorator>) -> SharedClient {
    decorators
        .into_iter()
        .fold(base, |inner, decorate| decorate(inner))
}

/// Assemble the configured pipeline: logging innermost, then content-routed
/// proxying, then retry outermost, around the HTTP transport.
pub fn assemble(config: &RelayConfig) -> SharedClient {
    let base: SharedClient = Arc::new(HttpTransport::new(config.route.max_body_bytes));

    let mut decorators: Vec<Decorator> = Vec::new();

    if config.observability.agent_log_enabled {
        decorators.push(logging(Arc::new(TracingSink)));
    }

    let director = match &config.route.body_equals {
        Some(literal) => MatchDirector::body_equals(
            literal.clone(),
            config.route.if_url.clone(),
            config.route.else_url.clone(),
        ),
        None => MatchDirector::new(
            None,
            config.route.if_url.clone(),
            config.route.else_url.clone(),
        ),
    }
    .with_body_limit(config.route.max_body_bytes);
    decorators.push(proxy(Arc::new(director)));

    decorators.push(fault_tolerance(
        config.retries.max_attempts,
        Duration::from_millis(config.retries.base_delay_ms),
    ));

    compose(base, decorators)
}
