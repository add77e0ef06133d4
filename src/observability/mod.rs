//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Bootstrap and serve loop produce:
//!     → tracing events (bind attempts, conflicts, task lifecycle)
//!     → user-facing log lines (startup message, collaborator lines)
//!
//! Consumers:
//!     → tracing subscriber (stdout, EnvFilter-controlled)
//!     → Logger sink (stdout, event emitter, or muted)
//! ```
//!
//! # Design Decisions
//! - Two channels on purpose: diagnostics stay on even when the
//!   user-facing sink is muted, and vice versa
//! - HTTP request logging comes from tower-http's TraceLayer

pub mod logging;

pub use logging::{init_tracing, EventSink, LogEvent, Logger};
