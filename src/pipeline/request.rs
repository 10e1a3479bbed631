//! Outbound request model.
//!
//! # Responsibilities
//! - Carry method, target URI, headers, and body through the pipeline
//! - Allow directors to replace the target and body in place
//! - Make body capture an explicit, replayable operation
//!
//! # Design Decisions
//! - The body is a two-state value: a stream is consumable exactly once,
//!   a buffered body replays cheaply (`Bytes` clones share the allocation)
//! - `buffer_body` is the only way to read the body; it leaves a buffered
//!   copy in place so later layers and retry attempts see the same bytes

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, Method, Uri};

use crate::pipeline::error::{PipelineError, PipelineResult};

/// Request body in one of two states.
#[derive(Debug)]
pub enum RequestBody {
    /// Streaming body, consumable once.
    Stream(Body),
    /// Fully captured body, replayable any number of times.
    Buffered(Bytes),
}

/// One outbound HTTP request traversing the pipeline.
///
/// Created per call by the server adapter (or a test), mutated in place by
/// directors, and discarded after one traversal plus any retries within it.
#[derive(Debug)]
pub struct OutboundRequest {
    pub method: Method,
    pub target: Uri,
    pub headers: HeaderMap,
    body: RequestBody,
}

impl OutboundRequest {
    /// Build a request around a streaming body.
    pub fn new(method: Method, target: Uri, headers: HeaderMap, body: Body) -> Self {
        Self {
            method,
            target,
            headers,
            body: RequestBody::Stream(body),
        }
    }

    /// Build a request around an already-buffered body.
    pub fn buffered(
        method: Method,
        target: Uri,
        headers: HeaderMap,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            method,
            target,
            headers,
            body: RequestBody::Buffered(body.into()),
        }
    }

    /// The caller's declared agent identity, taken from the `User-Agent`
    /// header. Absent header yields `"-"`.
    pub fn agent(&self) -> &str {
        self.headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-")
    }

    /// Capture the full body into an owned buffer, leaving a replayable
    /// buffered body in place, and return the captured bytes.
    ///
    /// Idempotent: a buffered body is returned as-is. `limit` caps how many
    /// bytes a streaming body may occupy; exceeding it is a `BodyRead`
    /// failure, as is any I/O fault while draining the stream.
    pub async fn buffer_body(&mut self, limit: usize) -> PipelineResult<Bytes> {
        let body = std::mem::replace(&mut self.body, RequestBody::Buffered(Bytes::new()));
        match body {
            RequestBody::Buffered(bytes) => {
                self.body = RequestBody::Buffered(bytes.clone());
                Ok(bytes)
            }
            RequestBody::Stream(stream) => {
                let bytes = to_bytes(stream, limit)
                    .await
                    .map_err(|err| PipelineError::BodyRead(err.to_string()))?;
                self.body = RequestBody::Buffered(bytes.clone());
                Ok(bytes)
            }
        }
    }

    /// Replace the body wholesale.
    pub fn set_body(&mut self, body: RequestBody) {
        self.body = body;
    }
}
