//! Crate-level error type.

use thiserror::Error;

use crate::net::listener::BindError;

/// Errors a bootstrap or a running server can surface.
///
/// Port conflicts never appear here; they are absorbed by the bind
/// retry loop and only show through the final resolved port.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The bind loop ran out of attempts with every candidate port in
    /// use.
    #[error("no free port after {attempts} attempts starting at {first_port}")]
    PortsExhausted { first_port: u16, attempts: u32 },

    /// A bind failure that was not an address conflict.
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    /// TLS credential files missing or unreadable.
    #[error("failed to load TLS credentials")]
    Tls(#[source] std::io::Error),

    /// The serve task stopped with an error.
    #[error("server task failed")]
    Serve(#[source] std::io::Error),
}

impl From<BindError> for ServeError {
    fn from(error: BindError) -> Self {
        match error {
            BindError::Exhausted {
                first_port,
                attempts,
            } => ServeError::PortsExhausted {
                first_port,
                attempts,
            },
            BindError::Io(e) => ServeError::Bind(e),
        }
    }
}
