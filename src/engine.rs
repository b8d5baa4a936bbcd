use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{AxisPhase, AxisSnapshot, Candidate};
use crate::ranking::{
    dedup_max, fuse_axis_orderings, order_for_side, resolve_stop, sort_by_score_desc, Polarity,
};

/// One active vibe axis: a concept, its (possibly unresolved) opposite, the
/// slider position, and the two candidate sets fetched for its poles.
#[derive(Debug, Clone)]
pub struct Axis {
    pub id: Uuid,
    pub concept_label: String,
    pub opposite_label: Option<String>,
    position: f32,
    /// Set once the opposite lookup resolved to "no opposite known".
    single_pole: bool,
    concept_candidates: Vec<Candidate>,
    opposite_candidates: Vec<Candidate>,
    /// Cached within-axis ordering for the current position + candidates.
    ordered: Vec<Candidate>,
    phase: AxisPhase,
    /// Request generation the axis's fetches were issued under.
    generation: u64,
    created_at: DateTime<Utc>,
}

impl Axis {
    fn polarity(&self) -> Polarity {
        if self.single_pole {
            Polarity::Single
        } else {
            Polarity::Dual
        }
    }

    /// Recompute the cached ordering from current state. Pure with respect
    /// to update history: only position and the candidate sets matter.
    fn recompute(&mut self) {
        let point = resolve_stop(self.position, self.polarity());
        self.ordered = order_for_side(&self.concept_candidates, &self.opposite_candidates, point);
    }

    fn snapshot(&self) -> AxisSnapshot {
        AxisSnapshot {
            id: self.id,
            concept_label: self.concept_label.clone(),
            opposite_label: self.opposite_label.clone(),
            position: self.position,
            phase: self.phase.clone(),
            single_pole: self.single_pole,
            concept_count: self.concept_candidates.len(),
            opposite_count: self.opposite_candidates.len(),
            created_at: self.created_at,
        }
    }
}

/// The ranking controller: owns every active axis, the main query's result
/// set, and the request generations that guard against stale responses.
/// All candidate-set mutations funnel through the `apply_*` methods, which
/// recompute the affected axis's ordering and nothing else.
#[derive(Debug, Default)]
pub struct RankingEngine {
    axes: HashMap<Uuid, Axis>,
    main_results: Vec<Candidate>,
    main_query: Option<String>,
    category: Option<String>,
    /// Generation of the latest main search; bumped on every new query so
    /// responses from superseded fetches can be dropped by comparison.
    query_generation: u64,
    /// Source for per-axis request generations.
    next_generation: u64,
}

impl RankingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Main query ───────────────────────────────────────────

    /// Record a new main query and return the generation its fetch carries.
    /// Any in-flight fetch from an earlier generation is superseded.
    pub fn begin_search(&mut self, query: &str, category: &str) -> u64 {
        self.main_query = Some(query.to_string());
        self.category = Some(category.to_string());
        self.query_generation += 1;
        self.query_generation
    }

    /// Apply main-query results. Returns false (and changes nothing) when
    /// the generation is stale.
    pub fn apply_search_results(&mut self, generation: u64, items: Vec<Candidate>) -> bool {
        if generation != self.query_generation {
            return false;
        }
        let mut merged = dedup_max(items);
        sort_by_score_desc(&mut merged);
        self.main_results = merged;
        true
    }

    pub fn main_query(&self) -> Option<&str> {
        self.main_query.as_deref()
    }

    /// Category filter applied to axis sub-queries: whatever the latest
    /// main search used, or "all" before any search.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("all")
    }

    // ── Axis lifecycle ───────────────────────────────────────

    /// Create an axis for a concept filter. Returns the axis id and the
    /// generation its candidate fetches must carry.
    pub fn add_axis(&mut self, concept_label: &str) -> (Uuid, u64) {
        self.next_generation += 1;
        let generation = self.next_generation;

        let axis = Axis {
            id: Uuid::new_v4(),
            concept_label: concept_label.to_string(),
            opposite_label: None,
            position: 1.0,
            single_pole: false,
            concept_candidates: Vec::new(),
            opposite_candidates: Vec::new(),
            ordered: Vec::new(),
            phase: AxisPhase::FetchingConcept,
            generation,
            created_at: Utc::now(),
        };

        let id = axis.id;
        self.axes.insert(id, axis);
        tracing::info!("Axis {id} added for concept '{concept_label}'");
        (id, generation)
    }

    /// Drop an axis and all its state. Late responses for it will find no
    /// axis and be discarded.
    pub fn remove_axis(&mut self, id: Uuid) -> bool {
        let removed = self.axes.remove(&id).is_some();
        if removed {
            tracing::info!("Axis {id} removed");
        }
        removed
    }

    /// Move an axis's slider. Pure recompute, no new I/O.
    pub fn set_axis_position(&mut self, id: Uuid, position: f32) -> bool {
        let Some(axis) = self.axes.get_mut(&id) else {
            return false;
        };
        axis.position = position.clamp(0.0, 1.0);
        axis.recompute();
        true
    }

    /// Record the Concept Metadata Service's answer for an axis. `None`
    /// pins the axis to the concept half (single-pole). Returns false when
    /// the axis is gone or the generation is stale; a true return with a
    /// `Some` label means the caller should fetch opposite candidates now,
    /// eagerly, so crossing the midpoint later never pops.
    pub fn resolve_opposite(
        &mut self,
        id: Uuid,
        generation: u64,
        opposite_label: Option<String>,
    ) -> bool {
        let Some(axis) = self.axes.get_mut(&id) else {
            return false;
        };
        if axis.generation != generation {
            return false;
        }

        match opposite_label {
            Some(label) => {
                tracing::info!("Axis {id}: opposite '{label}' resolved");
                axis.opposite_label = Some(label);
                axis.phase = AxisPhase::FetchingOpposite;
            }
            None => {
                tracing::info!("Axis {id}: no opposite, pinned single-pole");
                axis.single_pole = true;
                axis.phase = AxisPhase::Ready;
                axis.recompute();
            }
        }
        true
    }

    /// Apply concept-side candidates for an axis. Stale generations and
    /// unknown axes are dropped silently.
    pub fn apply_concept_results(&mut self, id: Uuid, generation: u64, items: Vec<Candidate>) -> bool {
        let Some(axis) = self.axes.get_mut(&id) else {
            return false;
        };
        if axis.generation != generation {
            return false;
        }

        let mut merged = dedup_max(items);
        sort_by_score_desc(&mut merged);
        axis.concept_candidates = merged;
        if axis.phase == AxisPhase::FetchingConcept {
            axis.phase = AxisPhase::ConceptReady;
        }
        axis.recompute();
        true
    }

    /// Apply opposite-side candidates for an axis. Same staleness rules.
    pub fn apply_opposite_results(&mut self, id: Uuid, generation: u64, items: Vec<Candidate>) -> bool {
        let Some(axis) = self.axes.get_mut(&id) else {
            return false;
        };
        if axis.generation != generation {
            return false;
        }

        let mut merged = dedup_max(items);
        sort_by_score_desc(&mut merged);
        axis.opposite_candidates = merged;
        axis.phase = AxisPhase::Ready;
        axis.recompute();
        true
    }

    // ── Views ────────────────────────────────────────────────

    pub fn snapshot(&self, id: Uuid) -> Option<AxisSnapshot> {
        self.axes.get(&id).map(Axis::snapshot)
    }

    /// All axes, oldest first (the order sliders are stacked in the UI).
    pub fn snapshots(&self) -> Vec<AxisSnapshot> {
        let mut all: Vec<&Axis> = self.axes.values().collect();
        all.sort_by_key(|a| a.created_at);
        all.iter().map(|a| a.snapshot()).collect()
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// The ordering the UI renders: the main query's results when no axis
    /// is active, a single axis's own ordering, or the fused ordering
    /// across all active axes.
    pub fn ordered_items(&self) -> Vec<Candidate> {
        let mut active: Vec<&Axis> = self.axes.values().collect();
        active.sort_by_key(|a| a.created_at);

        match active.len() {
            0 => self.main_results.clone(),
            1 => active[0].ordered.clone(),
            _ => {
                let orderings: Vec<&[Candidate]> =
                    active.iter().map(|a| a.ordered.as_slice()).collect();
                fuse_axis_orderings(&orderings)
            }
        }
    }
}
