use clap::Parser;
use linklet_gateway::app::App;
use linklet_gateway::cli::CLI;
use linklet_gateway::state::AppState;
use linklet_service::{LinkService, RandomGenerator};
use linklet_storage::InMemoryLinkStore;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = CLI::try_parse()?;

    let service = LinkService::new(
        InMemoryLinkStore::new(),
        RandomGenerator::with_length(config.code_length as usize),
    );
    let state = AppState::new(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        code_length = config.code_length,
        "starting linklet gateway"
    );

    App::serve(listener, state, shutdown_signal()).await?;

    info!("gateway stopped");
    Ok(())
}

/// Completes on SIGINT (ctrl-c) or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install sigterm handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received, draining in-flight requests");
}
