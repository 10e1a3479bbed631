//! Request logging decorator.
//!
//! # Responsibilities
//! - Record one line per delegated call: agent identity, method, endpoint
//! - Delegate to the wrapped client and return its result unmodified
//!
//! # Design Decisions
//! - The sink is an explicit constructor dependency, never a global; the
//!   pipeline assembler owns its lifecycle
//! - Concurrent `record` calls must not interleave partial records; that
//!   synchronization belongs to the sink, not the decorator

use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::pipeline::request::OutboundRequest;
use crate::pipeline::{Client, ClientResponse, Decorator, PipelineResult, SharedClient};

/// Destination for request log lines.
pub trait LogSink: Send + Sync {
    /// Record one complete line. Must be safe under concurrent calls.
    fn record(&self, line: &str);
}

/// Sink emitting one `tracing` event per record.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, line: &str) {
        tracing::info!(target: "relay_proxy::request_log", "{}", line);
    }
}

/// Sink writing one line per record to a mutex-guarded writer.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and hand back the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn record(&self, line: &str) {
        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        let _ = writeln!(writer, "{}", line);
    }
}

struct LoggingClient {
    inner: SharedClient,
    sink: Arc<dyn LogSink>,
}

#[async_trait]
impl Client for LoggingClient {
    async fn perform(&self, req: &mut OutboundRequest) -> PipelineResult<ClientResponse> {
        self.sink
            .record(&format!("{}: {} {}", req.agent(), req.method, req.target));
        self.inner.perform(req).await
    }
}

/// Decorate a client so each invocation records agent identity, method, and
/// target endpoint before delegating. Neither the request nor the response
/// is consumed or altered; errors pass through untouched.
pub fn logging(sink: Arc<dyn LogSink>) -> Decorator {
    Box::new(move |inner| Arc::new(LoggingClient { inner, sink }))
}
