//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - The request-log decorator's sink is separate from diagnostics: it is a
//!   constructor dependency of the pipeline, not a global
//! - Metrics are cheap (atomic updates) and optional

pub mod logging;
pub mod metrics;
