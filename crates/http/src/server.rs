use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::{AppState, create_router};

/// Serves the router on `addr` until `shutdown` is cancelled.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr, shutdown: CancellationToken) -> anyhow::Result<()> {
    let router = create_router(state);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "starting webhook server");
    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;
    tracing::info!("webhook server stopped");
    Ok(())
}
