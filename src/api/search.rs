use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::models::{SearchRequest, SearchResponse};
use crate::services::retrieval;
use crate::state::AppState;

/// POST /api/search - Run the main free-text query against the Retrieval
/// Service and install the results as the base ordering.
///
/// The fetch carries the generation it was issued under; if another search
/// supersedes it while in flight, its results are dropped silently and the
/// previous ordering stays on screen.
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let query = req.query.trim().to_string();
    if query.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Query is required".to_string()));
    }

    let generation = state.engine.write().begin_search(&query, &req.category);

    // Upstream failure degrades to an empty result set, never an error
    let items = match retrieval::search(
        &state.http_client,
        &state.config.retrieval,
        &query,
        &req.category,
    )
    .await
    {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Retrieval failed for '{query}': {e:#}");
            Vec::new()
        }
    };

    let total = items.len();
    let applied = state.engine.write().apply_search_results(generation, items);
    if !applied {
        tracing::info!("Dropped results for superseded query '{query}'");
    }

    Ok(Json(SearchResponse { query, total }))
}
