//! HTTP boundary: a single `GET /rates` endpoint over a [`RateStore`].
//!
//! Validation failures become 400 responses before the store is touched,
//! datastore failures become 500 responses carrying the driver message, and
//! anything else (including handler panics) becomes a generic 500.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use crate::core::RateStore;
use crate::utils::error::Result;
use std::future::Future;
use tokio::net::TcpListener;

/// Serves the router on `listener` until `shutdown` resolves.
pub async fn serve<S, F>(listener: TcpListener, state: AppState<S>, shutdown: F) -> Result<()>
where
    S: RateStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("🚀 Listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
