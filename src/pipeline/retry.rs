//! Fault-tolerance decorator: retry with linear backoff.
//!
//! # Responsibilities
//! - Re-invoke the wrapped client on failure, up to a fixed attempt count
//! - Pause between attempts with a linearly growing delay
//!
//! # Design Decisions
//! - Every failure is retried identically; there is no retryable versus
//!   non-retryable classification, so a director failure surfaced through
//!   an inner proxy layer behaves exactly like a transport failure
//! - The last error is surfaced verbatim; no "attempts exhausted" wrapper
//! - The backoff sleep is a tokio sleep, so dropping the pipeline future
//!   (e.g. an enclosing timeout firing) cancels a pending retry

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::pipeline::request::OutboundRequest;
use crate::pipeline::{Client, ClientResponse, Decorator, PipelineResult, SharedClient};

/// Delay inserted after a failed attempt, linear in the attempt index:
/// 0, b, 2b, 3b, …
pub fn linear_backoff(attempt: u32, base: Duration) -> Duration {
    base.saturating_mul(attempt)
}

struct FaultTolerantClient {
    inner: SharedClient,
    attempts: u32,
    backoff: Duration,
}

#[async_trait]
impl Client for FaultTolerantClient {
    async fn perform(&self, req: &mut OutboundRequest) -> PipelineResult<ClientResponse> {
        let mut attempt = 0;
        loop {
            match self.inner.perform(req).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    attempt += 1;
                    if attempt >= self.attempts {
                        return Err(err);
                    }
                    let delay = linear_backoff(attempt - 1, self.backoff);
                    tracing::warn!(
                        attempt,
                        delay = ?delay,
                        error = %err,
                        "attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

/// Decorate a client to retry on failure: `attempts` total invocations
/// (clamped to at least one), pausing `backoff × i` after failed attempt
/// `i`. The first success short-circuits; after the final attempt the last
/// error is returned.
pub fn fault_tolerance(attempts: u32, backoff: Duration) -> Decorator {
    let attempts = attempts.max(1);
    Box::new(move |inner| {
        Arc::new(FaultTolerantClient {
            inner,
            attempts,
            backoff,
        })
    })
}
