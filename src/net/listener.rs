//! Listener binding with port-conflict retry.
//!
//! # Responsibilities
//! - Bind the requested port
//! - On address-in-use, move to the next port and rebind
//! - Stop after the configured attempt bound
//! - Surface any other bind error unchanged
//!
//! State machine: `binding → (conflict → binding)* → bound`, with
//! `bound` as terminal success and a non-conflict error or attempt
//! exhaustion as terminal failure.

use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

/// Error type for the bind loop.
#[derive(Debug)]
pub enum BindError {
    /// Every candidate port in the attempted range was in use, or the
    /// port number overflowed.
    Exhausted { first_port: u16, attempts: u32 },
    /// A bind failure that was not an address conflict.
    Io(std::io::Error),
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::Exhausted { first_port, attempts } => write!(
                f,
                "no free port after {} attempts starting at {}",
                attempts, first_port
            ),
            BindError::Io(e) => write!(f, "Failed to bind: {}", e),
        }
    }
}

impl std::error::Error for BindError {}

/// True when a bind failure means the port is held by another listener.
fn is_conflict(error: &std::io::Error) -> bool {
    error.kind() == std::io::ErrorKind::AddrInUse
}

/// Bind `first_port`, walking up one port per conflict.
///
/// Returns the listener together with the port that actually bound,
/// which is the only port a caller may report. Conflicts are retried
/// up to `max_attempts` total binds; any other error is returned
/// immediately.
pub async fn bind_with_retry(
    host: IpAddr,
    first_port: u16,
    max_attempts: u32,
) -> Result<(TcpListener, u16), BindError> {
    let mut port = first_port;
    let mut attempts = 0;

    while attempts < max_attempts {
        attempts += 1;
        let addr = SocketAddr::new(host, port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                tracing::info!(address = %addr, attempts, "Listener bound");
                return Ok((listener, port));
            }
            Err(e) if is_conflict(&e) => {
                tracing::warn!(port, attempts, "Port in use, trying next");
                match port.checked_add(1) {
                    Some(next) => port = next,
                    None => return Err(BindError::Exhausted { first_port, attempts }),
                }
            }
            Err(e) => return Err(BindError::Io(e)),
        }
    }

    Err(BindError::Exhausted {
        first_port,
        attempts,
    })
}
