use webhook_receiver::shell::config::{Settings, is_dev_env};
use webhook_receiver::shell::http::router;
use webhook_receiver::shell::state::AppState;
use webhook_receiver::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init(!is_dev_env());

    let settings = Settings::from_env()?;
    tracing::debug!(?settings, "settings loaded");
    let app = router(AppState::from_settings(&settings)?);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, env = %settings.env, "webhook receiver listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(error) => tracing::error!(%error, "failed to listen for shutdown signal"),
    }
}
