// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::view_renderer::ViewRenderer;
use crate::infrastructure::config::load_dashboard_config;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let addr = config.server.bind_addr()?;

    // Create renderer (application layer)
    let renderer = ViewRenderer::new(config.content);

    // Create application state
    let state = Arc::new(AppState { renderer });

    let router = router(state);

    tracing::info!("Starting nexa-dashboard on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
