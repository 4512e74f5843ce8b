//! Laundry API server entry point.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use laundry_api::{create_router, AppConfig, AppState, RepoManager, UseCaseManager};
use laundry_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting laundry API...");

    let config = AppConfig::load().context("failed to load configuration")?;
    info!(
        host = %config.api_host,
        port = config.api_port,
        db_host = %config.db.host,
        db_name = %config.db.name,
        "Configuration loaded"
    );

    let db = Database::new(
        DbConfig::new(config.db.connect_options())
            .max_connections(config.db.max_connections)
            .acquire_timeout(config.db.acquire_timeout()),
    )
    .await
    .context("failed to connect to PostgreSQL")?;
    info!("Connected to PostgreSQL");

    let usecases = UseCaseManager::new(RepoManager::from_database(&db), &config);
    let app = create_router(AppState::new(usecases));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
