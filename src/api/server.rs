use tokio::net::TcpListener;

use crate::api::{routes::app, state::AppState};
use crate::core::ConfigProvider;
use crate::utils::error::Result;

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve<C: ConfigProvider>(config: &C, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("🚀 Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // without a signal handler, keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
