use crate::models::{Candidate, Side};
use crate::ranking::stops::StopPoint;
use crate::ranking::tiers::{partition, sort_by_score_desc, TierSet, TIER_COUNT};

/// 0-based index of the tier presented first for a given side and stop.
///
/// Concept side: stop 10 is unrotated (offset 0) and each stop below it
/// shifts priority back by one tier, so stop 6 starts at tier 5. Opposite
/// side mirrors this: stop 1 is unrotated (best opposite matches first) and
/// stop 5 starts at tier 5.
fn rotation_start(side: Side, stop: u8) -> usize {
    match side {
        Side::Concept => TIER_COUNT - stop as usize,
        Side::Opposite => stop as usize - 1,
    }
}

/// Flatten a tier set into one ordering with tier priority cyclically
/// rotated for the given stop. A one-stop slider move shifts the rotation
/// start by exactly one tier, so adjacent stops differ by a single
/// 10%-percentile band rather than a full reshuffle.
pub fn rotate_tiers(tiers: &TierSet, side: Side, stop: u8) -> Vec<Candidate> {
    let start = rotation_start(side, stop);
    let buckets = tiers.buckets();

    let mut ordered = Vec::with_capacity(tiers.total_len());
    for i in 0..TIER_COUNT {
        ordered.extend_from_slice(&buckets[(start + i) % TIER_COUNT]);
    }
    ordered
}

/// Produce the within-axis ordering for a resolved stop.
///
/// Opposite-side stops rotate the opposite candidates' tiers; when those
/// are unavailable (not fetched yet, or the axis has none) the concept
/// tiers are rotated under the opposite stop numbers instead, so the slider
/// keeps reflowing smoothly rather than freezing or emptying. If even that
/// yields nothing, the raw score-sorted concept list is the ordering.
pub fn order_for_side(
    concept: &[Candidate],
    opposite: &[Candidate],
    point: StopPoint,
) -> Vec<Candidate> {
    let ordered = match point.side {
        Side::Concept => rotate_tiers(&partition(concept.to_vec()), Side::Concept, point.stop),
        Side::Opposite if !opposite.is_empty() => {
            rotate_tiers(&partition(opposite.to_vec()), Side::Opposite, point.stop)
        }
        Side::Opposite => rotate_tiers(&partition(concept.to_vec()), Side::Opposite, point.stop),
    };

    if !ordered.is_empty() {
        return ordered;
    }

    let mut fallback = concept.to_vec();
    sort_by_score_desc(&mut fallback);
    fallback
}
