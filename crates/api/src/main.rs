//! Inficard server entry point

use std::sync::Arc;

use anyhow::Context;
use inficard_api::{router, AppContext};
use inficard_infra::config::loader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real deployments set the variables directly.
    let _ = dotenvy::dotenv();

    let filter = std::env::var("INFICARD_LOG")
        .map(EnvFilter::new)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = loader::load().context("failed to load configuration")?;
    let listen_addr = config.server.listen_addr.clone();

    let ctx = Arc::new(AppContext::new(config).context("failed to wire application context")?);
    let app = router(ctx);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(%listen_addr, "inficard listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
