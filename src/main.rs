//! relay-proxy: content-routing HTTP relay.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 RELAY PROXY                   │
//!                    │                                               │
//!  Inbound Request   │  ┌─────────┐     ┌──────────────────────────┐│
//!  ──────────────────┼─▶│  http   │────▶│     pipeline (outbound)  ││
//!                    │  │ adapter │     │  fault_tolerance (outer) ││
//!                    │  └─────────┘     │    proxy + match         ││
//!                    │                  │      logging (inner)     ││
//!  Inbound Response  │  ┌─────────┐     │        transport ────────┼┼──▶ Upstream
//!  ◀─────────────────┼──│response │◀────│                          ││
//!                    │  │ stream  │     └──────────────────────────┘│
//!                    │  └─────────┘                                  │
//!                    │  config · observability · lifecycle           │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use relay_proxy::config::{load_config, RelayConfig};
use relay_proxy::http::HttpServer;
use relay_proxy::lifecycle::Shutdown;
use relay_proxy::observability;
use relay_proxy::pipeline;

#[derive(Parser)]
#[command(name = "relay-proxy")]
#[command(about = "Content-routing HTTP relay with retry and request logging", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        if_url = %config.route.if_url,
        else_url = %config.route.else_url,
        max_attempts = config.retries.max_attempts,
        "relay-proxy starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "failed to parse metrics address"
            ),
        }
    }

    let client = pipeline::assemble(&config);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(&config, client);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
