//! HTTP server wiring (feature `server`).
//!
//! Routes the request gateway through axum, reads configuration from the
//! command line or environment, and shuts down gracefully on SIGTERM/Ctrl+C.

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "pwd_validator::config";

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "pwd_validator::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "pwd_validator::server::shutdown";

mod config;
mod routes;
mod shutdown;

pub use config::{Cli, ServerConfig};
pub use routes::{MAX_BODY_BYTES, routes};
pub use shutdown::shutdown_signal;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Serves `app` until `shutdown` is cancelled.
///
/// In-flight requests get up to the configured shutdown timeout to finish.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot be
/// bound, or the server fails while running.
pub async fn serve(app: Router, config: &ServerConfig, shutdown: CancellationToken) -> anyhow::Result<()> {
    config.validate().context("invalid server configuration")?;

    let addr = config.server_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %addr,
        "Server is ready and listening for connections"
    );

    let graceful = shutdown.clone().cancelled_owned();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(graceful)
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("server task failed")?.context("server error")?;
            return Ok(());
        }
        () = shutdown.cancelled() => {}
    }

    match tokio::time::timeout(config.shutdown_timeout(), server).await {
        Ok(joined) => {
            joined.context("server task failed")?.context("server error")?;
            tracing::info!(target: TRACING_TARGET_SHUTDOWN, "Server shut down gracefully");
        }
        Err(_) => {
            tracing::warn!(
                target: TRACING_TARGET_SHUTDOWN,
                timeout_secs = config.shutdown_timeout,
                "Graceful shutdown timed out, dropping remaining connections"
            );
        }
    }

    Ok(())
}
