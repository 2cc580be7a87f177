use product_catalog::api;
use product_catalog::config::ServerConfig;
use product_catalog::lifecycle::tracing::setup_tracing;
use product_catalog::lifecycle::CatalogSystem;
use tokio::net::TcpListener;
use tracing::info;

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            let _ = tokio::signal::ctrl_c().await;
            return;
        };
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;
    let system = CatalogSystem::new(config.channel_capacity);

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|e| format!("bind {}: {e}", config.bind))?;
    info!(bind = %config.bind, capacity = config.channel_capacity, "Catalog listening");

    let app = api::router(system.product_client.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;
    Ok(())
}
