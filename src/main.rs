use shopgraph::app_module::build_application;
use shopgraph::config::ConfigService;
use shopgraph::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting shopgraph...");

    let config = ConfigService::from_env();
    let (app, server_config) = build_application(config).await.map_err(|e| {
        tracing::error!(error = %e, "failed to start application");
        e
    })?;

    server::serve(app, server_config).await
}
