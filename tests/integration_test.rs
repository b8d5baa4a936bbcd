//! Integration tests for the vibe-axis ranking pipeline.
//!
//! These tests drive the engine end-to-end with synthetic candidate sets,
//! standing in for Retrieval / Concept Metadata Service responses (no
//! network involved).

use vibe_gallery::engine::RankingEngine;
use vibe_gallery::models::{Candidate, Side};
use vibe_gallery::ranking::{dedup_max, fuse_axis_orderings, partition, rotate_tiers};

/// Helper: a corpus slice with descending scores, ids `p0, p1, ...`.
fn scored(prefix: &str, n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| Candidate::new(format!("{prefix}{i}"), 1.0 - i as f32 * 0.005))
        .collect()
}

fn ordered_ids(engine: &RankingEngine) -> Vec<String> {
    engine.ordered_items().iter().map(|c| c.id.clone()).collect()
}

#[test]
fn test_warm_axis_scenario() {
    // Axis "warm", no opposite fetched yet, concept candidates A/B,
    // position 1.0 -> expect [A, B]
    let mut engine = RankingEngine::new();
    let (id, generation) = engine.add_axis("warm");
    engine.apply_concept_results(
        id,
        generation,
        vec![Candidate::new("A", 0.9), Candidate::new("B", 0.5)],
    );
    engine.set_axis_position(id, 1.0);
    assert_eq!(ordered_ids(&engine), vec!["A", "B"]);

    // Same axis at position 0.0 with opposite candidates [C]: the true
    // opposite side has data, so the ordering is [C] alone; concept items
    // would appear only if the opposite list were exhausted
    engine.resolve_opposite(id, generation, Some("cool".to_string()));
    engine.apply_opposite_results(id, generation, vec![Candidate::new("C", 0.8)]);
    engine.set_axis_position(id, 0.0);
    assert_eq!(ordered_ids(&engine), vec!["C"]);
}

#[test]
fn test_slider_drag_reflows_one_band_at_a_time() {
    let mut engine = RankingEngine::new();
    let (id, generation) = engine.add_axis("warm");
    engine.apply_concept_results(id, generation, scored("img", 100));

    // Sweep the concept half of the slider; record who leads at each stop
    let mut leaders = Vec::new();
    for position in [0.55, 0.65, 0.75, 0.85, 1.0] {
        engine.set_axis_position(id, position);
        leaders.push(ordered_ids(&engine)[0].clone());
    }

    // Each stop promotes the next tier boundary: tier 5, 4, 3, 2, 1
    assert_eq!(leaders, vec!["img40", "img30", "img20", "img10", "img0"]);
}

#[test]
fn test_opposite_not_loaded_still_reflows() {
    // Dragging into the opposite half before (or without) opposite data
    // rotates the concept tiers under the opposite stop numbers
    let mut engine = RankingEngine::new();
    let (id, generation) = engine.add_axis("warm");
    engine.apply_concept_results(id, generation, scored("img", 100));

    engine.set_axis_position(id, 0.0);
    let at_far_left = ordered_ids(&engine);
    assert_eq!(at_far_left.len(), 100);
    assert_eq!(at_far_left[0], "img0"); // opposite stop 1 is unrotated

    engine.set_axis_position(id, 0.45);
    let near_middle = ordered_ids(&engine);
    assert_eq!(near_middle[0], "img40"); // stop 5 leads with tier 5
}

#[test]
fn test_two_axes_consensus_wins() {
    let mut engine = RankingEngine::new();
    let (warm, g_warm) = engine.add_axis("warm");
    let (minimal, g_minimal) = engine.add_axis("minimal");

    engine.apply_concept_results(
        warm,
        g_warm,
        vec![
            Candidate::new("consensus", 0.9),
            Candidate::new("warm_only", 0.85),
        ],
    );
    engine.apply_concept_results(
        minimal,
        g_minimal,
        vec![
            Candidate::new("consensus", 0.8),
            Candidate::new("minimal_only", 0.75),
        ],
    );

    let ids = ordered_ids(&engine);
    // Ranked #1 in every active axis -> #1 overall
    assert_eq!(ids[0], "consensus");
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_axis_removal_drops_its_influence() {
    let mut engine = RankingEngine::new();
    let generation = engine.begin_search("interiors", "all");
    engine.apply_search_results(generation, scored("main", 5));

    let (warm, g_warm) = engine.add_axis("warm");
    let (minimal, g_minimal) = engine.add_axis("minimal");
    engine.apply_concept_results(warm, g_warm, scored("warm", 3));
    engine.apply_concept_results(minimal, g_minimal, scored("min", 3));

    // Two axes: fused ordering contains both axes' items, none of main's
    let fused = ordered_ids(&engine);
    assert_eq!(fused.len(), 6);
    assert!(fused.iter().all(|id| !id.starts_with("main")));

    // Down to one axis: that axis's own ordering verbatim
    engine.remove_axis(warm);
    assert_eq!(ordered_ids(&engine), vec!["min0", "min1", "min2"]);

    // No axes left: back to the main query's results
    engine.remove_axis(minimal);
    assert_eq!(ordered_ids(&engine).len(), 5);
    assert!(ordered_ids(&engine)[0].starts_with("main"));
}

#[test]
fn test_duplicate_retrieval_rows_collapse_before_tiering() {
    // The same item matched via two source categories; the higher score
    // must win and the ordering must contain it once
    let mut engine = RankingEngine::new();
    let (id, generation) = engine.add_axis("warm");

    let mut dup = vec![
        Candidate::new("dup", 0.3),
        Candidate::new("other", 0.6),
        Candidate::new("dup", 0.9),
    ];
    // Round-trip: dedup of dedup output is a no-op
    dup = dedup_max(dedup_max(dup));
    assert_eq!(dup.len(), 2);

    engine.apply_concept_results(id, generation, dup);
    assert_eq!(ordered_ids(&engine), vec!["dup", "other"]);
}

#[test]
fn test_fused_output_never_invents_items() {
    let axis_a = scored("a", 10);
    let axis_b = scored("b", 10);
    let fused = fuse_axis_orderings(&[&axis_a, &axis_b]);

    assert_eq!(fused.len(), 20);
    for item in &fused {
        assert!(item.id.starts_with('a') || item.id.starts_with('b'));
    }
}

#[test]
fn test_rotation_round_trip_covers_all_items() {
    // Every stop on both sides is a permutation of the same 100 items
    let tiers = partition(scored("img", 100));

    for (side, stops) in [(Side::Concept, 6..=10u8), (Side::Opposite, 1..=5u8)] {
        for stop in stops {
            let ordered = rotate_tiers(&tiers, side, stop);
            assert_eq!(ordered.len(), 100, "{side:?} stop {stop}");
            let mut ids: Vec<&str> = ordered.iter().map(|c| c.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 100, "{side:?} stop {stop}");
        }
    }
}

#[test]
fn test_interleaved_search_and_axis_updates() {
    // A stale main-query response must not clobber a newer one, and axis
    // updates landing in between must be unaffected
    let mut engine = RankingEngine::new();
    let stale = engine.begin_search("loud", "all");

    let (id, generation) = engine.add_axis("warm");
    engine.apply_concept_results(id, generation, scored("warm", 4));

    let fresh = engine.begin_search("quiet", "all");
    assert!(engine.apply_search_results(fresh, scored("quiet", 4)));
    assert!(!engine.apply_search_results(stale, scored("loud", 4)));

    // Axis still active, so the axis ordering is displayed
    assert_eq!(ordered_ids(&engine)[0], "warm0");

    // Remove the axis: the surviving main results are the fresh ones
    engine.remove_axis(id);
    assert_eq!(ordered_ids(&engine)[0], "quiet0");
}
