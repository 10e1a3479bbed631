//! Proxy decorator and the director contract.
//!
//! # Responsibilities
//! - Run a director against the request before forwarding
//! - Abort without reaching the wrapped client when the director fails
//!
//! # Design Decisions
//! - Directors mutate the request in place; a failing director leaves the
//!   call unforwarded, and the failure surfaces to the caller verbatim

use std::sync::Arc;

use async_trait::async_trait;

use crate::pipeline::request::OutboundRequest;
use crate::pipeline::{Client, ClientResponse, Decorator, PipelineResult, SharedClient};

/// A request-mutating, possibly-failing step invoked before forwarding.
#[async_trait]
pub trait Director: Send + Sync {
    async fn steer(&self, req: &mut OutboundRequest) -> PipelineResult<()>;
}

struct ProxyClient {
    inner: SharedClient,
    director: Arc<dyn Director>,
}

#[async_trait]
impl Client for ProxyClient {
    async fn perform(&self, req: &mut OutboundRequest) -> PipelineResult<ClientResponse> {
        self.director.steer(req).await?;
        self.inner.perform(req).await
    }
}

/// Decorate a client with a director. On director failure the call is never
/// forwarded; on success the wrapped client receives the possibly mutated
/// request.
pub fn proxy(director: Arc<dyn Director>) -> Decorator {
    Box::new(move |inner| Arc::new(ProxyClient { inner, director }))
}
