//! User-facing log sink and tracing setup.
//!
//! # Responsibilities
//! - Route startup and collaborator log lines to stdout, an event
//!   sink, or nowhere, per config
//! - Initialize the tracing subscriber for diagnostics
//!
//! # Design Decisions
//! - The sink is chosen once at configuration time and never rechecked
//! - Diagnostics (tracing) and user-facing lines are separate channels;
//!   muting one does not touch the other

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Event name used for every log line sent to an external sink.
pub const LOG_EVENT: &str = "log";

/// Consumed interface for external event emitters.
pub trait EventSink: Send + Sync {
    /// Emit a named event carrying a string payload.
    fn emit(&self, event: &str, payload: &str);
}

/// A log line delivered through a channel-backed sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub name: String,
    pub payload: String,
}

impl EventSink for mpsc::UnboundedSender<LogEvent> {
    fn emit(&self, event: &str, payload: &str) {
        let _ = self.send(LogEvent {
            name: event.to_string(),
            payload: payload.to_string(),
        });
    }
}

/// User-facing logger with a sink fixed at construction.
///
/// Cloneable so collaborators can keep emitting lines after the
/// bootstrap that created it has finished.
#[derive(Clone)]
pub struct Logger {
    sink: Sink,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

#[derive(Clone)]
enum Sink {
    Muted,
    Stdout,
    Events(Arc<dyn EventSink>),
}

impl Logger {
    /// A logger that drops every line.
    pub fn muted() -> Self {
        Self { sink: Sink::Muted }
    }

    /// A logger that writes lines to standard output.
    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// A logger that emits a `"log"` event per line.
    pub fn events(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink: Sink::Events(sink),
        }
    }

    /// Select the sink the config asks for. Muting wins over an
    /// installed event sink.
    pub fn from_config(no_log_output: bool, events: Option<Arc<dyn EventSink>>) -> Self {
        if no_log_output {
            Self::muted()
        } else if let Some(sink) = events {
            Self::events(sink)
        } else {
            Self::stdout()
        }
    }

    /// Emit one line through the configured sink.
    pub fn log(&self, message: &str) {
        match &self.sink {
            Sink::Muted => {}
            Sink::Stdout => println!("{}", message),
            Sink::Events(sink) => sink.emit(LOG_EVENT, message),
        }
    }
}

/// Initialize the tracing subscriber for the binary.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devserve=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
