//! devserve binary.
//!
//! Serves a directory over HTTP(S), walking up to the next free port
//! when the requested one is taken.

use std::path::PathBuf;

use clap::Parser;

use devserve::config::{load_config, validate_config, ServeConfig};
use devserve::observability::init_tracing;
use devserve::StaticServer;

#[derive(Parser)]
#[command(name = "devserve")]
#[command(about = "HTTP(S) static file server with port-conflict retry", long_about = None)]
struct Cli {
    /// Directory to serve
    root: Option<PathBuf>,

    /// Port to listen on; the next free port is tried on conflict
    #[arg(short, long)]
    port: Option<u16>,

    /// TOML config file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Serve over HTTPS using private.key/public.cert from --tls-dir
    #[arg(long)]
    https: bool,

    /// Directory holding the TLS credential files
    #[arg(long)]
    tls_dir: Option<PathBuf>,

    /// Additional static root checked after the primary one
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Silence all log output
    #[arg(long)]
    no_log_output: bool,

    /// Skip the startup message
    #[arg(long)]
    no_server_info: bool,

    /// Bind attempts before giving up
    #[arg(long)]
    max_bind_attempts: Option<u32>,
}

impl Cli {
    /// Config file first, then flags on top.
    fn into_config(self) -> Result<ServeConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServeConfig::default(),
        };

        if self.root.is_some() {
            config.root = self.root;
        }
        if self.port.is_some() {
            config.port = self.port;
        }
        if self.https {
            config.use_https = true;
        }
        if self.tls_dir.is_some() {
            config.tls_dir = self.tls_dir;
        }
        if self.project_root.is_some() {
            config.project_root = self.project_root;
        }
        if self.no_log_output {
            config.no_log_output = true;
        }
        if self.no_server_info {
            config.no_server_info = true;
        }
        if let Some(attempts) = self.max_bind_attempts {
            config.bind.max_attempts = attempts;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Cli::parse().into_config()?;

    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            tracing::error!(%error, "Invalid configuration");
        }
        return Err("configuration validation failed".into());
    }

    let handle = StaticServer::new(config).start().await?;
    tracing::info!(port = handle.port(), "Server started");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    handle.shutdown();
    handle.wait().await?;
    Ok(())
}
