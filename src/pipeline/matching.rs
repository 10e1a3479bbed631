//! Content-based destination matching.
//!
//! # Responsibilities
//! - Inspect the request body and pick one of two destination endpoints
//! - Restore a replayable body before returning, byte-for-byte
//!
//! # Design Decisions
//! - An absent predicate always selects the else-endpoint: it never errors
//!   and never matches
//! - The body capture operates on per-call data only; nothing is cached
//!   across calls

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::Uri;

use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::pipeline::proxy::Director;
use crate::pipeline::request::OutboundRequest;

/// Default cap on captured body size.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Predicate over captured request body bytes.
pub type BodyPredicate = Arc<dyn Fn(&[u8]) -> bool + Send + Sync>;

/// Director that routes on request content: predicate true selects the
/// if-endpoint, false or absent selects the else-endpoint.
pub struct MatchDirector {
    predicate: Option<BodyPredicate>,
    if_url: String,
    else_url: String,
    body_limit: usize,
}

impl MatchDirector {
    pub fn new(
        predicate: Option<BodyPredicate>,
        if_url: impl Into<String>,
        else_url: impl Into<String>,
    ) -> Self {
        Self {
            predicate,
            if_url: if_url.into(),
            else_url: else_url.into(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Match on the body being byte-equal to `literal`.
    pub fn body_equals(
        literal: impl Into<Bytes>,
        if_url: impl Into<String>,
        else_url: impl Into<String>,
    ) -> Self {
        let literal = literal.into();
        Self::new(
            Some(Arc::new(move |body: &[u8]| body == &literal[..])),
            if_url,
            else_url,
        )
    }

    /// Cap how many body bytes may be captured for inspection.
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    fn parse_endpoint(endpoint: &str) -> PipelineResult<Uri> {
        endpoint
            .parse()
            .map_err(|err: axum::http::uri::InvalidUri| PipelineError::InvalidEndpoint {
                endpoint: endpoint.to_owned(),
                reason: err.to_string(),
            })
    }
}

#[async_trait]
impl Director for MatchDirector {
    async fn steer(&self, req: &mut OutboundRequest) -> PipelineResult<()> {
        // Capture leaves a replayable body in place; downstream layers and
        // retry attempts observe the original bytes.
        let body = req.buffer_body(self.body_limit).await?;

        let matched = self
            .predicate
            .as_ref()
            .map(|predicate| predicate(&body))
            .unwrap_or(false);
        let chosen = if matched { &self.if_url } else { &self.else_url };

        req.target = Self::parse_endpoint(chosen)?;
        Ok(())
    }
}
