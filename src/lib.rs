//! Composable outbound HTTP request pipeline.
//!
//! Cross-cutting concerns (request logging, content-based routing, and
//! fault-tolerant retry) are layered as independent, order-sensitive
//! decorators around one abstract "perform this request" capability. The
//! inbound server is a thin adapter that forwards each exchange through the
//! composed pipeline.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pipeline;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pipeline::{assemble, compose, Client, Decorator, SharedClient};
