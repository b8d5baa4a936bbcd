use axum::extract::{Query, State};
use axum::Json;

use crate::models::{Candidate, ResultsQuery, ResultsResponse};
use crate::state::AppState;

/// GET /api/results?offset=&limit= - The current ordering, windowed.
///
/// The UI reveals a growing prefix as the user scrolls; the window is a
/// plain offset/limit over the full ordering and is independent of the
/// ranking itself.
pub async fn results(
    State(state): State<AppState>,
    Query(params): Query<ResultsQuery>,
) -> Json<ResultsResponse> {
    let ordered = state.engine.read().ordered_items();
    let total = ordered.len();

    let items: Vec<Candidate> = ordered
        .into_iter()
        .skip(params.offset)
        .take(params.limit)
        .collect();
    let has_more = params.offset + items.len() < total;

    Json(ResultsResponse {
        items,
        total,
        has_more,
    })
}
