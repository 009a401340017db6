use anyhow::Result;
use sell_copy::{app, app_state::AppState, config::Config, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let config = Config::from_env()?;
    let app = app::router(AppState::live());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}
