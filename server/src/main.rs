//! HTTP server: reads settings from the environment, ensures tables, serves the API.
//!
//! Run from repo root: `cargo run -p library-server`

use library_api::{app, connect, ensure_tables, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("library_api=info,library_server=info,tower_http=info")),
        )
        .init();

    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;
    let state = AppState::new(pool.clone());
    let router = app(state, config.max_body_bytes);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
