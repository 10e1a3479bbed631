//! Base HTTP transport at the bottom of every composed stack.
//!
//! # Responsibilities
//! - Physically perform one request against its target endpoint
//! - Map network and protocol failures into pipeline errors
//!
//! # Design Decisions
//! - The body is buffered before sending so an outer retry layer can replay
//!   it; the buffered copy stays on the request across attempts
//! - Responses keep their streaming body; only the request side is buffered

use axum::body::Body;
use axum::http::{Request, Response};
use hyper::body::Incoming;
use hyper_util::client::legacy::{connect::HttpConnector, Client as HyperClient};
use hyper_util::rt::TokioExecutor;

use async_trait::async_trait;

use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::pipeline::request::OutboundRequest;
use crate::pipeline::{Client, ClientResponse};

/// Client performing requests over the wire via hyper.
pub struct HttpTransport {
    client: HyperClient<HttpConnector, Body>,
    body_limit: usize,
}

impl HttpTransport {
    pub fn new(body_limit: usize) -> Self {
        Self {
            client: HyperClient::builder(TokioExecutor::new()).build(HttpConnector::new()),
            body_limit,
        }
    }
}

#[async_trait]
impl Client for HttpTransport {
    async fn perform(&self, req: &mut OutboundRequest) -> PipelineResult<ClientResponse> {
        let payload = req.buffer_body(self.body_limit).await?;

        let mut builder = Request::builder()
            .method(req.method.clone())
            .uri(req.target.clone());
        if let Some(headers) = builder.headers_mut() {
            for (name, value) in req.headers.iter() {
                headers.insert(name.clone(), value.clone());
            }
        }
        let request = builder
            .body(Body::from(payload))
            .map_err(|err| PipelineError::Upstream(err.to_string()))?;

        let response: Response<Incoming> = self
            .client
            .request(request)
            .await
            .map_err(|err| PipelineError::Upstream(err.to_string()))?;

        let (parts, body) = response.into_parts();
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}
