use std::sync::Arc;

use recipe_finder::{FinderConfig, RecipeFinder, RecipeFinderMcpServer};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match FinderConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            tracing::error!("Please verify:");
            tracing::error!("  - SPOONACULAR_API_KEY is set to your Spoonacular API key");
            tracing::error!("  - SPOONACULAR_BASE_URL, if set, is an http(s) URL");
            tracing::error!("  - SPOONACULAR_TIMEOUT_SECS, if set, is a positive integer");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Using Spoonacular at {} with key {}",
        config.base_url,
        config.api_key.preview()
    );

    let finder = Arc::new(RecipeFinder::from_config(&config)?);

    tracing::info!("Testing API access with key...");
    let checker = RecipeFinderMcpServer::new(finder.clone());
    match checker.test_api_access().await {
        Ok(_) => {
            tracing::info!("API access test passed");
        }
        Err(e) => {
            tracing::warn!("API access test failed: {}", e);
            tracing::warn!("The server will continue, but searches may fail until the key or network is fixed.");
        }
    }

    let sse_config = SseServerConfig {
        bind: config.bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("Recipe Finder MCP Server listening on {}", sse_config.bind);

    // serve_with_config handles binding, axum server setup, and graceful shutdown internally
    let sse_server = SseServer::serve_with_config(sse_config).await?;

    let ct = sse_server.with_service(move || RecipeFinderMcpServer::new(finder.clone()));

    tracing::info!("Recipe Finder MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
