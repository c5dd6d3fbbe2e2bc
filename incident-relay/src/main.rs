use incident_relay::config::RelayConfig;
use incident_relay::startup::Application;
use relay_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = RelayConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing("incident-relay", &config.common.log_level);
    config.warn_if_incomplete();

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("Incident relay listening on port {}", app.port());

    app.run_until_stopped().await
}
