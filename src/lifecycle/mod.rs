//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Bootstrap → Serve task running
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or handle.shutdown() → broadcast → serve task drains → exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
