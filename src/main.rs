use anyhow::Context;
use sofly::{app::App, config::get_configuration, telemetry::get_subscriber};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = get_configuration().context("Failed to read configuration")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let app = App::with(&config)
        .await
        .with_context(|| format!("Could not bind {}:{}", config.host, config.port))?;

    tracing::info!(
        port = app.port()?,
        origins = ?config.allowed_origins(),
        store_configured = config.store.url.is_some() && config.store.key.is_some(),
        "starting server"
    );
    app.serve().await.context("The server stopped unexpectedly")?;

    Ok(())
}
