use anyhow::Context;
use order_lifecycle::config::AppConfig;
use order_lifecycle::http::{build_app, AppState};
use order_lifecycle::lifecycle::{seed, setup_tracing, OrderSystem};
use tracing::{info, warn};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    setup_tracing();
    info!(?config, "Configuration loaded");

    let system = OrderSystem::with_capacity(config.mailbox_capacity);
    if config.seed_db {
        seed(&system).await.context("seeding demo data")?;
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!("listening on {}", listener.local_addr()?);

    let app = build_app(AppState::from_system(&system));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Application stopped");
    Ok(())
}
