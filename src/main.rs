use axum::routing::{delete, get, patch, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use vibe_gallery::api;
use vibe_gallery::config::Config;
use vibe_gallery::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Retrieval service: {}", config.retrieval.base_url);
    tracing::info!("Concept metadata service: {}", config.concepts.base_url);

    let state = AppState::new(config.clone())?;

    let app = Router::new()
        .route("/api/search", post(api::search::search))
        .route("/api/results", get(api::results::results))
        .route("/api/axes", get(api::axes::list_axes))
        .route("/api/axes", post(api::axes::add_axis))
        .route("/api/axes/{id}", delete(api::axes::remove_axis))
        .route("/api/axes/{id}/position", patch(api::axes::set_position))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
