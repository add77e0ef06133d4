//! Static file server with port-retry bootstrap.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServeConfig;
pub use error::ServeError;
pub use http::{ServerHandle, StaticServer};
pub use lifecycle::Shutdown;
pub use observability::logging::{EventSink, LogEvent, Logger};
