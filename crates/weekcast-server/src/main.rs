use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use weekcast_client::{FetchConfig, weather_service};
use weekcast_server::routes;
use weekcast_server::state::AppState;
use weekcast_server::templates::Templates;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("weekcast=info".parse()?))
        .with_target(false)
        .init();

    let port: u16 = match std::env::var("WEEKCAST_SERVER_PORT") {
        Err(_) => 3000,
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("Invalid WEEKCAST_SERVER_PORT '{raw}'"))?,
    };
    let addr = format!("0.0.0.0:{port}");

    let config = FetchConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, timeout = ?config.timeout, "Upstream configured");

    let state = Arc::new(AppState {
        forecast: weather_service(config)?,
        templates: Templates::new()?,
    });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
