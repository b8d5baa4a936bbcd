use crate::models::Candidate;

/// Number of percentile buckets a candidate list is split into.
pub const TIER_COUNT: usize = 10;

/// Ten ordered percentile buckets of a score-sorted candidate list.
/// Tier 1 holds the highest-scoring `ceil(n/10)` items. Ephemeral:
/// recomputed on every reorder, never persisted.
#[derive(Debug, Clone, Default)]
pub struct TierSet {
    tiers: [Vec<Candidate>; TIER_COUNT],
}

impl TierSet {
    /// Bucket `n` (1-based, matching the tier numbering the rotation law
    /// is written in).
    pub fn tier(&self, n: usize) -> &[Candidate] {
        &self.tiers[n - 1]
    }

    pub fn buckets(&self) -> &[Vec<Candidate>; TIER_COUNT] {
        &self.tiers
    }

    /// Total item count across all buckets.
    pub fn total_len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(Vec::is_empty)
    }
}

/// Sort candidates by score descending. Stable, so equal scores keep their
/// input order.
pub fn sort_by_score_desc(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Split a candidate list into 10 equal-sized percentile tiers.
///
/// `tier_size = ceil(n/10)`; successive chunks of `tier_size` fill tiers
/// 1, 2, ... in score order, and any trailing tiers are left empty (valid
/// for n < 10). Input is assumed deduplicated and sorted descending, but is
/// re-sorted here so an unsorted caller cannot corrupt the tiering.
pub fn partition(mut candidates: Vec<Candidate>) -> TierSet {
    sort_by_score_desc(&mut candidates);

    let n = candidates.len();
    if n == 0 {
        return TierSet::default();
    }

    let tier_size = n.div_ceil(TIER_COUNT);
    let mut tiers: [Vec<Candidate>; TIER_COUNT] = Default::default();
    for (i, candidate) in candidates.into_iter().enumerate() {
        tiers[i / tier_size].push(candidate);
    }

    TierSet { tiers }
}
