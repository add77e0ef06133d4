//! Server bootstrap and middleware composition.
//!
//! # Responsibilities
//! - Select HTTP or HTTPS transport per config
//! - Compose the middleware chain: custom router, then static roots
//! - Bind the port through the retry loop
//! - Spawn the serve task and hand back an owned handle
//!
//! # Design Decisions
//! - Exactly one transport is constructed per bootstrap call
//! - The handle records only the port that completed the listening
//!   transition, never a rejected intermediate attempt
//! - The startup future settles once: a handle after the first
//!   successful bind, or the first non-conflict error

use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServeConfig;
use crate::error::ServeError;
use crate::lifecycle::Shutdown;
use crate::net::{listener, tls};
use crate::observability::logging::{EventSink, Logger};

/// The listener accepts on all interfaces; the startup message names
/// `localhost` because that is how a dev server is reached.
const BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Builder for one server bootstrap.
///
/// Carries the config plus the runtime collaborators that cannot live
/// in a config file: a custom router and an event sink.
pub struct StaticServer {
    config: ServeConfig,
    router: Option<Router>,
    events: Option<Arc<dyn EventSink>>,
}

impl StaticServer {
    /// Create a bootstrap for the given config.
    pub fn new(config: ServeConfig) -> Self {
        Self {
            config,
            router: None,
            events: None,
        }
    }

    /// Mount custom routes ahead of static serving. Routes defined
    /// here win over files of the same path under any static root.
    pub fn with_router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    /// Send log lines to an external sink instead of stdout.
    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Start the server.
    ///
    /// Resolves once the listener is accepting, with a handle carrying
    /// the bound port and the startup message. Port conflicts are
    /// retried internally; every other failure is terminal.
    pub async fn start(self) -> Result<ServerHandle, ServeError> {
        let config = self.config;
        let logger = Logger::from_config(config.no_log_output, self.events);

        // Credentials load before any listener exists; a missing or
        // malformed file fails the whole bootstrap.
        let tls_config = if config.use_https {
            let dir = config.credentials_dir();
            Some(
                tls::load_credentials(&dir)
                    .await
                    .map_err(ServeError::Tls)?,
            )
        } else {
            None
        };

        let app = build_router(
            self.router,
            config.root.as_deref(),
            config.project_root.as_deref(),
        );

        let first_port = config.resolved_port();
        let (tcp_listener, port) =
            listener::bind_with_retry(BIND_HOST, first_port, config.bind.max_attempts).await?;

        let shutdown = Shutdown::new();
        let task = match tls_config {
            Some(tls_config) => spawn_https(tcp_listener, tls_config, app, &shutdown)?,
            None => spawn_http(tcp_listener, app, &shutdown),
        };

        let message = format!(
            "Static file server running on: {}://localhost:{} (CTRL + C to shut down)",
            config.scheme(),
            port
        );
        if !config.no_server_info {
            logger.log(&message);
        }

        Ok(ServerHandle {
            port,
            root: config.root,
            message,
            logger,
            shutdown,
            task,
        })
    }
}

/// A running server.
///
/// Owns the serve task; dropping the handle leaves the task running
/// until the runtime shuts down.
#[derive(Debug)]
pub struct ServerHandle {
    port: u16,
    root: Option<PathBuf>,
    message: String,
    logger: Logger,
    shutdown: Shutdown,
    task: JoinHandle<io::Result<()>>,
}

impl ServerHandle {
    /// The port that actually bound. May be higher than the requested
    /// port when conflicts were retried.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The static root being served, when one was configured.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// The startup message, whether or not it was logged.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The logger the bootstrap used. Collaborators can keep emitting
    /// lines through it after startup.
    pub fn logger(&self) -> Logger {
        self.logger.clone()
    }

    /// Ask the serve task to drain and exit.
    pub fn shutdown(&self) {
        self.shutdown.trigger();
    }

    /// Wait for the serve task to finish.
    pub async fn wait(self) -> Result<(), ServeError> {
        self.task
            .await
            .map_err(|e| ServeError::Serve(io::Error::other(e)))?
            .map_err(ServeError::Serve)
    }
}

/// Compose the request-handling chain.
///
/// Order is fixed: custom routes, then `root`, then `project_root`,
/// first match wins. With neither roots nor router every request is a
/// 404.
fn build_router(custom: Option<Router>, root: Option<&Path>, project_root: Option<&Path>) -> Router {
    let app = custom.unwrap_or_default();
    let app = match (root, project_root) {
        (Some(root), Some(project)) => {
            app.fallback_service(ServeDir::new(root).fallback(ServeDir::new(project)))
        }
        (Some(root), None) => app.fallback_service(ServeDir::new(root)),
        (None, Some(project)) => app.fallback_service(ServeDir::new(project)),
        (None, None) => app,
    };
    app.layer(TraceLayer::new_for_http())
}

fn spawn_http(listener: TcpListener, app: Router, shutdown: &Shutdown) -> JoinHandle<io::Result<()>> {
    let mut rx = shutdown.subscribe();
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.recv().await;
            })
            .await
    })
}

fn spawn_https(
    listener: TcpListener,
    tls_config: RustlsConfig,
    app: Router,
    shutdown: &Shutdown,
) -> Result<JoinHandle<io::Result<()>>, ServeError> {
    let std_listener = listener.into_std().map_err(ServeError::Bind)?;
    let handle = axum_server::Handle::new();

    let graceful = handle.clone();
    let mut rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = rx.recv().await;
        graceful.graceful_shutdown(Some(Duration::from_secs(5)));
    });

    Ok(tokio::spawn(async move {
        axum_server::from_tcp_rustls(std_listener, tls_config)
            .handle(handle)
            .serve(app.into_make_service())
            .await
    }))
}
