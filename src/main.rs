//! Service entry point: configuration, tracing and the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use vulnscan::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: failed to load .env file: {}", e);
        }
    }

    let settings = Settings::from_env()?;
    init_tracing();

    tracing::info!(project = %settings.project_name, "starting vulnerability scan service");

    let repository: DynVulnerabilityRepository = Arc::new(OsvClient::new(
        settings.scanner_endpoint.clone(),
        settings.lookup_timeout,
    )?);

    let store = Arc::new(ApplicationStore::new());
    let scanner = ScanManifestUseCase::new(repository, settings.max_concurrent_lookups);
    let state = AppState {
        create_application: Arc::new(CreateApplicationUseCase::new(scanner, store.clone())),
        queries: Arc::new(ApplicationQueries::new(store)),
        project_name: settings.project_name.clone(),
    };

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address: {}", e))?;

    tracing::info!(%addr, endpoint = %settings.scanner_endpoint, "server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown signal handler: {}", e);
        return;
    }
    tracing::info!("shutdown signal received");
}
