use local_summarizer::ai::load_model;
use local_summarizer::api::{AppState, create_router};
use local_summarizer::core::config::AppConfig;
use local_summarizer::features::Summarizer;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    local_summarizer::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;

    info!("Starting Local Summarizer Service...");

    let summarizer = Summarizer::new(load_model(&config).await);
    match summarizer.model_name() {
        Some(name) => info!("Model: {}", name),
        None => info!("Model: not loaded, fallback summarization only"),
    }

    let app = create_router(AppState::new(summarizer));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Local Summarizer listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Local Summarizer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
