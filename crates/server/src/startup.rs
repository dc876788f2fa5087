//! Server startup: store connection, shared state and the listener.

use std::sync::Arc;

use tracing::info;

use docdash_storage::MongoStore;

use crate::router::build_router;
use crate::state::AppState;

/// Connect the store and serve until Ctrl-C.
pub async fn serve(config: &docdash_core::Config) -> anyhow::Result<()> {
    config.log_summary();
    let store = MongoStore::connect(&config.store).await?;
    let app = build_router(AppState::new(Arc::new(store)));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Print the discovery listing as a JSON array.
pub async fn print_datasets(config: &docdash_core::Config) -> anyhow::Result<()> {
    let store = MongoStore::connect(&config.store).await?;
    let names = docdash_core::list_datasets(&store).await?;
    println!("{}", serde_json::to_string_pretty(&names)?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
