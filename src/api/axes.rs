use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::models::{AddAxisRequest, AxisSnapshot, Candidate, SetPositionRequest};
use crate::services::{concepts, retrieval};
use crate::state::AppState;

/// GET /api/axes - List active axes, oldest first.
pub async fn list_axes(State(state): State<AppState>) -> Json<Vec<AxisSnapshot>> {
    Json(state.engine.read().snapshots())
}

/// POST /api/axes - Add a vibe axis for a concept.
///
/// Registers the axis immediately, then fetches in the background:
/// concept-side candidates, the opposite label, and (eagerly, as soon as
/// the label resolves) opposite-side candidates, so the first crossing of
/// the slider midpoint never pops.
pub async fn add_axis(
    State(state): State<AppState>,
    Json(req): Json<AddAxisRequest>,
) -> Result<(StatusCode, Json<AxisSnapshot>), (StatusCode, String)> {
    let concept = req.concept.trim().to_string();
    if concept.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Concept is required".to_string()));
    }

    let (id, generation, category) = {
        let mut engine = state.engine.write();
        let (id, generation) = engine.add_axis(&concept);
        (id, generation, engine.category().to_string())
    };

    // Concept-side candidates
    {
        let state = state.clone();
        let concept = concept.clone();
        let category = category.clone();
        tokio::spawn(async move {
            let items =
                fetch_candidates(&state, &concept, &category, "concept").await;
            state.engine.write().apply_concept_results(id, generation, items);
        });
    }

    // Opposite label, then opposite-side candidates
    {
        let state = state.clone();
        let concept = concept.clone();
        tokio::spawn(async move {
            let opposite = match concepts::lookup_opposite(
                &state.http_client,
                &state.config.concepts,
                &concept,
            )
            .await
            {
                Ok(opposite) => opposite,
                Err(e) => {
                    tracing::warn!("Opposite lookup for '{concept}' failed: {e:#}");
                    None
                }
            };

            let applied = state
                .engine
                .write()
                .resolve_opposite(id, generation, opposite.clone());
            if !applied {
                return;
            }
            let Some(opposite_label) = opposite else {
                return;
            };

            let items = fetch_candidates(&state, &opposite_label, &category, "opposite").await;
            state.engine.write().apply_opposite_results(id, generation, items);
        });
    }

    let snapshot = state.engine.read().snapshot(id).ok_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        "Axis vanished during creation".to_string(),
    ))?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// DELETE /api/axes/:id - Remove an axis and all its state.
pub async fn remove_axis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.engine.write().remove_axis(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Axis not found".to_string()))
    }
}

/// PATCH /api/axes/:id/position - Move an axis's slider. Pure recompute
/// over already-fetched candidates; no network I/O.
pub async fn set_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetPositionRequest>,
) -> Result<Json<AxisSnapshot>, (StatusCode, String)> {
    let mut engine = state.engine.write();
    if !engine.set_axis_position(id, req.position) {
        return Err((StatusCode::NOT_FOUND, "Axis not found".to_string()));
    }
    let snapshot = engine.snapshot(id).ok_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        "Axis vanished during update".to_string(),
    ))?;
    Ok(Json(snapshot))
}

/// Fetch one side's candidates, degrading to empty on upstream failure so
/// the axis still produces an ordering from whatever data exists.
async fn fetch_candidates(
    state: &AppState,
    label: &str,
    category: &str,
    side: &str,
) -> Vec<Candidate> {
    match retrieval::search(&state.http_client, &state.config.retrieval, label, category).await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("{side} fetch for '{label}' failed: {e:#}");
            Vec::new()
        }
    }
}
