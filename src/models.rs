use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ranked item from the Retrieval Service.
///
/// `payload` is the opaque display payload (image URL, title, palette, ...)
/// carried through the ranking pipeline unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub score: f32,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Candidate {
    pub fn new(id: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.into(),
            score,
            payload: serde_json::Value::Null,
        }
    }
}

/// Lifecycle phase of a vibe axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AxisPhase {
    FetchingConcept,
    ConceptReady,
    FetchingOpposite,
    Ready,
}

/// Which pole of an axis an ordering is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Concept,
    Opposite,
}

/// Public view of one axis, as rendered by the slider UI.
#[derive(Debug, Clone, Serialize)]
pub struct AxisSnapshot {
    pub id: Uuid,
    pub concept_label: String,
    pub opposite_label: Option<String>,
    pub position: f32,
    pub phase: AxisPhase,
    /// True once the opposite lookup resolved to "no opposite" (axis is
    /// pinned to the concept half of the slider).
    pub single_pole: bool,
    pub concept_count: usize,
    pub opposite_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Main search request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "all".to_string()
}

/// Main search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
}

/// Add-axis request
#[derive(Debug, Clone, Deserialize)]
pub struct AddAxisRequest {
    pub concept: String,
}

/// Slider move request
#[derive(Debug, Clone, Deserialize)]
pub struct SetPositionRequest {
    pub position: f32,
}

/// Query parameters for the ordered-results window.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    40
}

/// One window of the current ordering, revealed lazily as the user scrolls.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub items: Vec<Candidate>,
    pub total: usize,
    pub has_more: bool,
}
