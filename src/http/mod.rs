//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! ServeConfig + collaborators
//!     → server.rs (transport selection, middleware chain, bind retry)
//!     → serve task (axum for HTTP, axum-server for HTTPS)
//!     → ServerHandle (bound port, message, logger, shutdown)
//! ```

pub mod server;

pub use server::{ServerHandle, StaticServer};
