use std::sync::Arc;

use crate::api::{AppState, router};
use crate::config::Config;
use crate::core::FbError;

/// Binds `config.server.addr` and serves until Ctrl-C.
pub async fn run(config: Config) -> Result<(), FbError> {
    let client = config.build_client()?;
    let addr = config.server.addr.clone();
    let policy = config.chart.range_policy;
    let app = router(AppState::new(config, Arc::new(client)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, range_policy = policy.as_str(), "finboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
