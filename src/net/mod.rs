//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Requested port
//!     → listener.rs (bind, walk up on conflict, bounded attempts)
//!     → tls.rs (optional credential loading)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - Conflict vs. everything-else is the only error split; conflicts
//!   retry, anything else is terminal
//! - The bound port is the single source of truth for what to report

pub mod listener;
pub mod tls;
