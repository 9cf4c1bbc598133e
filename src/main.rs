use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use codechat_backend::config::Config;
use codechat_backend::routes;
use codechat_backend::services::openrouter::OpenRouterClient;
use codechat_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    // Missing reference text or chat page is fatal before we start serving.
    let codebase = std::fs::read_to_string(&config.codebase_file)
        .with_context(|| format!("failed to read reference file {}", config.codebase_file))?;
    let index = Path::new(&config.static_dir).join("index.html");
    anyhow::ensure!(
        index.is_file(),
        "static chat page {} not found",
        index.display()
    );

    let openrouter = OpenRouterClient::new(&config)?;
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config, codebase, openrouter));

    let app = routes::create_router(state).layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("chat backend running at http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
