use std::collections::HashMap;

use crate::models::Candidate;

/// Accumulator for one item across the active axes' orderings.
#[derive(Debug, Clone)]
struct FusedItem {
    candidate: Candidate,
    /// Summed positional score, 1/(rank+1) per axis the item appears in.
    positional: f32,
    /// Number of axes the item appears in at all.
    axis_count: usize,
    /// Last-seen raw relevance score from the Retrieval Service.
    original_score: f32,
}

/// Combine per-axis orderings into one global ordering via positional
/// scoring.
///
/// Each item earns `1/(rank+1)` from every axis list it appears in (rank
/// 0-based), so ranking early in even one axis is never fully drowned out,
/// while consensus across axes still wins. Ties break by axis count, then
/// by the item's last-seen raw score, then by id so the result is fully
/// deterministic.
pub fn fuse_axis_orderings(orderings: &[&[Candidate]]) -> Vec<Candidate> {
    let mut accumulator: HashMap<String, FusedItem> = HashMap::new();

    for ordering in orderings {
        for (rank, candidate) in ordering.iter().enumerate() {
            let positional = 1.0 / (rank as f32 + 1.0);

            let entry = accumulator
                .entry(candidate.id.clone())
                .or_insert_with(|| FusedItem {
                    candidate: candidate.clone(),
                    positional: 0.0,
                    axis_count: 0,
                    original_score: candidate.score,
                });

            entry.positional += positional;
            entry.axis_count += 1;
            entry.original_score = candidate.score;
        }
    }

    let mut fused: Vec<FusedItem> = accumulator.into_values().collect();
    fused.sort_by(|a, b| {
        b.positional
            .partial_cmp(&a.positional)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.axis_count.cmp(&a.axis_count))
            .then_with(|| {
                b.original_score
                    .partial_cmp(&a.original_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.candidate.id.cmp(&b.candidate.id))
    });

    fused.into_iter().map(|f| f.candidate).collect()
}
