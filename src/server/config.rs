//! Command-line and environment configuration for the HTTP server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Result as AnyhowResult, anyhow};
use clap::{Args, Parser};

use super::TRACING_TARGET_CONFIG;

/// Complete CLI configuration.
///
/// Every option can also be set through the environment variable shown in
/// `--help`.
#[derive(Debug, Clone, Parser)]
#[command(name = "pwd-validator")]
#[command(about = "Password policy validation server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// Default log filter, used when `RUST_LOG` is not set.
    #[arg(long, env = "LOGGING_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Logs configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            host = %self.server.host,
            port = self.server.port,
            server_timeout_secs = self.server.server_timeout,
            shutdown_timeout_secs = self.server.shutdown_timeout,
            log_level = %self.log_level,
            "server configuration"
        );
    }
}

/// HTTP server configuration.
///
/// # Environment Variables
///
/// - `HOST` - Address to bind (default: 127.0.0.1)
/// - `HTTP_SERVER_PORT` - Port to listen on (default: 8080)
/// - `SERVER_TIMEOUT` - Per-request deadline in seconds (default: 10, max: 300)
/// - `SHUTDOWN_TIMEOUT` - Graceful shutdown timeout in seconds (default: 5, max: 300)
#[derive(Debug, Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Host address to bind the server to.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// TCP port number for the server to listen on.
    #[arg(short = 'p', long, env = "HTTP_SERVER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Deadline in seconds for reading a request body and answering it.
    #[arg(long, env = "SERVER_TIMEOUT", default_value_t = 10)]
    pub server_timeout: u64,

    /// Maximum time in seconds to wait for in-flight requests on shutdown.
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 5)]
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// - Port must not be 0
    /// - Server and shutdown timeouts must be 1-300 seconds
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.port == 0 {
            return Err(anyhow!("Port must not be 0."));
        }

        if self.server_timeout == 0 || self.server_timeout > 300 {
            return Err(anyhow!(
                "Server timeout {} seconds is invalid. Must be between 1 and 300 seconds.",
                self.server_timeout
            ));
        }

        if self.shutdown_timeout == 0 || self.shutdown_timeout > 300 {
            return Err(anyhow!(
                "Shutdown timeout {} seconds is invalid. Must be between 1 and 300 seconds.",
                self.shutdown_timeout
            ));
        }

        Ok(())
    }

    #[must_use]
    pub const fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    #[must_use]
    pub const fn server_timeout(&self) -> Duration {
        Duration::from_secs(self.server_timeout)
    }

    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            server_timeout: 10,
            shutdown_timeout: 5,
        }
    }
}
