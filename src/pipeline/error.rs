//! Pipeline error definitions.

use thiserror::Error;

/// Errors that can abort one traversal of the outbound pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading the request body failed (I/O fault or size cap exceeded).
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// A destination endpoint string did not parse as a URI.
    #[error("invalid destination endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The upstream transport failed at the network or protocol level.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
