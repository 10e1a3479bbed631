//! HTTP boundary subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, timeout, trace)
//!     → pipeline (composed outbound client)
//!     → response streamed back to the caller
//! ```

pub mod server;

pub use server::HttpServer;
