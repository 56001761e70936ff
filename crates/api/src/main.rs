use anyhow::Context;

use showcase_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    showcase_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = showcase_api::app::build_app(&config).context("failed to load catalog")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
