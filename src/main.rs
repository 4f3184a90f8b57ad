#![forbid(unsafe_code)]

use std::process;
use std::sync::Arc;

use clap::Parser;
use pwd_validator::server::{
    Cli, TRACING_TARGET_SHUTDOWN, TRACING_TARGET_STARTUP, routes, serve, shutdown_signal,
};
use pwd_validator::{InMemoryAttemptStore, RequestGateway, ValidationService};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting password validator"
    );
    cli.log();

    let store = Arc::new(InMemoryAttemptStore::new());
    let gateway = RequestGateway::new(ValidationService::new(store));
    let router = routes(gateway, cli.server.server_timeout());

    let shutdown = CancellationToken::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    serve(router, &cli.server, shutdown).await
}

/// Initializes tracing, preferring `RUST_LOG` over the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
