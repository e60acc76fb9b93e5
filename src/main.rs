mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use config::Config;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use store::PgChargeStore;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("rust-postgres-cobrancas starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = PgChargeStore::from_config(&config).await?;

    let addr: SocketAddr = format!("{}:{}", config.service_host, config.service_port).parse()?;

    let state = AppState {
        store: Arc::new(store),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
