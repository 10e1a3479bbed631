//! Full pipeline scenarios against live mock upstreams.

mod common;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::to_bytes;
use axum::http::{header, HeaderMap, Method, Uri};
use relay_proxy::pipeline::{
    compose, fault_tolerance, logging, proxy, HttpTransport, LogSink, MatchDirector,
    OutboundRequest, SharedClient,
};

/// Sink collecting request log lines for assertions.
#[derive(Default)]
struct CollectingSink {
    lines: Mutex<Vec<String>>,
}

impl CollectingSink {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for CollectingSink {
    fn record(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// The reference stack: logging innermost, content-routed proxy, retry
/// outermost, around a real HTTP transport.
fn reference_stack(
    sink: Arc<CollectingSink>,
    if_addr: SocketAddr,
    else_addr: SocketAddr,
    attempts: u32,
    backoff: Duration,
) -> SharedClient {
    compose(
        Arc::new(HttpTransport::new(1024 * 1024)),
        vec![
            logging(sink),
            proxy(Arc::new(MatchDirector::body_equals(
                "hello world",
                format!("http://{if_addr}"),
                format!("http://{else_addr}"),
            ))),
            fault_tolerance(attempts, backoff),
        ],
    )
}

fn outbound(body: &'static str) -> OutboundRequest {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, "pipeline-test".parse().unwrap());
    OutboundRequest::new(
        Method::POST,
        Uri::from_static("http://origin.invalid/"),
        headers,
        axum::body::Body::from(body),
    )
}

async fn response_text(response: relay_proxy::pipeline::ClientResponse) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn matching_body_routes_to_if_upstream_without_retries() {
    let if_addr = common::start_mock_upstream("alpha").await;
    let else_addr = common::start_mock_upstream("bravo").await;

    let sink = Arc::new(CollectingSink::default());
    let client = reference_stack(
        sink.clone(),
        if_addr,
        else_addr,
        5,
        Duration::from_secs(1),
    );

    let mut req = outbound("hello world");
    let response = client.perform(&mut req).await.unwrap();

    assert_eq!(response_text(response).await, "alpha");

    // Exactly one attempt, logged against the if-endpoint.
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(&if_addr.to_string()));
    assert!(lines[0].starts_with("pipeline-test: POST "));
}

#[tokio::test]
async fn non_matching_body_routes_to_else_upstream_with_retries() {
    let if_addr = common::start_mock_upstream("alpha").await;
    // Fails twice at the transport level, then answers.
    let else_addr = common::start_flaky_upstream(2, "omega").await;

    let sink = Arc::new(CollectingSink::default());
    let client = reference_stack(
        sink.clone(),
        if_addr,
        else_addr,
        5,
        Duration::from_millis(10),
    );

    let mut req = outbound("goodbye");
    let response = client.perform(&mut req).await.unwrap();

    assert_eq!(response_text(response).await, "omega");

    // Three attempts observed, all directed at the else-endpoint.
    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert!(line.contains(&else_addr.to_string()));
    }
}

#[tokio::test]
async fn body_bytes_reach_the_upstream_intact_after_matching() {
    // The upstream echoes nothing; the assertion is on what it received.
    let received = Arc::new(Mutex::new(Vec::new()));
    let seen = received.clone();
    let addr = common::start_recording_upstream(move |request_bytes| {
        seen.lock().unwrap().push(request_bytes);
    })
    .await;

    let sink = Arc::new(CollectingSink::default());
    let client = reference_stack(sink, addr, addr, 1, Duration::ZERO);

    let mut req = outbound("hello world");
    client.perform(&mut req).await.unwrap();

    let captured = received.lock().unwrap();
    let request_text = String::from_utf8_lossy(&captured[0]);
    // The body the upstream saw is the body the caller provided.
    assert!(request_text.ends_with("hello world"));
}
