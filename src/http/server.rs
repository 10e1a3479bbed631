//! Inbound server adapter.
//!
//! # Responsibilities
//! - Accept inbound requests and hand them to the composed pipeline
//! - Preserve method, endpoint, and body on the outbound request
//! - Stream the upstream response body back to the original caller
//! - On any pipeline failure: record it and end the exchange with no
//!   forwarded body
//!
//! # Design Decisions
//! - The adapter is a thin shim; every cross-cutting concern lives in the
//!   pipeline decorators it delegates to
//! - One request ID per inbound exchange, added as early as possible and
//!   propagated upstream

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::observability::metrics;
use crate::pipeline::{OutboundRequest, SharedClient};

const X_REQUEST_ID: &str = "x-request-id";

/// State injected into the forwarding handler.
#[derive(Clone)]
struct AppState {
    client: SharedClient,
}

/// HTTP server forwarding inbound exchanges into the pipeline.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server around an already-composed pipeline client.
    pub fn new(config: &RelayConfig, client: SharedClient) -> Self {
        let state = AppState { client };
        let router = Router::new()
            .route("/{*path}", any(forward_handler))
            .route("/", any(forward_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// Run the server until the shutdown signal fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Forwarding handler: one inbound exchange, one pipeline traversal.
async fn forward_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    let (parts, body) = request.into_parts();
    let method_str = parts.method.to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %parts.method,
        path = %parts.uri,
        "forwarding request"
    );

    let mut outbound = OutboundRequest::new(
        parts.method,
        parts.uri,
        outbound_headers(&parts.headers, request_id),
        body,
    );

    match state.client.perform(&mut outbound).await {
        Ok(response) => {
            metrics::record_exchange(&method_str, response.status().as_u16(), start);
            response
        }
        Err(err) => {
            tracing::error!(request_id = %request_id, error = %err, "pipeline failed");
            metrics::record_exchange(&method_str, StatusCode::BAD_GATEWAY.as_u16(), start);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Outbound header set: the caller's agent identity plus the request ID.
/// Inbound hop-by-hop and host headers stay behind.
fn outbound_headers(inbound: &HeaderMap, request_id: Uuid) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(agent) = inbound.get(header::USER_AGENT) {
        headers.insert(header::USER_AGENT, agent.clone());
    }
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        headers.insert(X_REQUEST_ID, value);
    }
    headers
}
