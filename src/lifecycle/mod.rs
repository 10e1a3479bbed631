//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup: load config → validate → assemble pipeline → bind listener
//! Shutdown: Ctrl+C → broadcast signal → stop accepting → drain → exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
