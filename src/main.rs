use anyhow::Context;
use recipe_relay::{build_app, config::AppConfig, init_tracing, run_server, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    tracing::info!(
        "API key loaded: {}",
        if config.gemini.has_api_key() { "yes" } else { "no" }
    );

    let app = build_app(AppState::new(config.gemini));

    run_server(app, &config.host, config.port)
        .await
        .with_context(|| format!("server on {}:{} failed", config.host, config.port))
}
