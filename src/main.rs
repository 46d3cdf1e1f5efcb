use anyhow::Context;
use axum::Router;
use tracing_subscriber::EnvFilter;

use fanclash_search::services::sample_data;
use fanclash_search::{build_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    tracing::info!("🔧 Configuration: {}", config.get_config_info());

    let app_state = AppState::new(config).context("Failed to initialize services")?;
    tracing::info!("✅ Elasticsearch client ready for {}", app_state.engine.base_url());

    let seeder = sample_data::spawn(app_state.engine.clone(), &app_state.config);

    let addr = app_state.config.bind_address();
    let app = build_router(app_state);
    let served = start_server(app, &addr).await;

    seeder.abort();
    served
}

async fn start_server(app: Router, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("🚀 Server starting on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("🛑 Shutdown signal received"),
        Err(e) => {
            tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
