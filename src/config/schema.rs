//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so a minimal config (or none at all) works.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Port used when the config does not name one.
pub const DEFAULT_PORT: u16 = 8000;

/// Root configuration for one server bootstrap.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServeConfig {
    /// Directory served as static content.
    pub root: Option<PathBuf>,

    /// Requested port. Absent or zero resolves to 8000.
    pub port: Option<u16>,

    /// Silence the log sink entirely.
    pub no_log_output: bool,

    /// Skip the startup message only.
    pub no_server_info: bool,

    /// Serve over TLS instead of plain HTTP.
    pub use_https: bool,

    /// Directory holding `private.key` and `public.cert`.
    /// Defaults to the working directory.
    pub tls_dir: Option<PathBuf>,

    /// Second static root, checked after `root` on each request.
    /// Useful for exposing untranspiled sources next to build output
    /// so source maps resolve.
    pub project_root: Option<PathBuf>,

    /// Port binding policy.
    pub bind: BindConfig,
}

/// Port binding policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BindConfig {
    /// Total bind attempts before giving up. Each conflict moves to the
    /// next port number.
    pub max_attempts: u32,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self { max_attempts: 10 }
    }
}

impl ServeConfig {
    /// Requested port, defaulting to 8000 when absent or zero.
    pub fn resolved_port(&self) -> u16 {
        match self.port {
            Some(port) if port != 0 => port,
            _ => DEFAULT_PORT,
        }
    }

    /// URL scheme matching the selected transport.
    pub fn scheme(&self) -> &'static str {
        if self.use_https {
            "https"
        } else {
            "http"
        }
    }

    /// Directory the TLS credential files are read from.
    pub fn credentials_dir(&self) -> PathBuf {
        self.tls_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
