use dashboard_api::{config::ApiConfig, routes, state::AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = ApiConfig::from_env();
    let app = routes::router(AppState::default());

    let addr = cfg.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(target = "dashboard", "Listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(target = "dashboard", "ctrl-c handler unavailable: {e}");
        std::future::pending::<()>().await;
    }
    info!(target = "dashboard", "shutdown signal received");
}
