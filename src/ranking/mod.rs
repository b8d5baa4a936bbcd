//! The vibe-axis ranking pipeline.
//!
//! Pure, synchronous computation over already-fetched candidate sets:
//! dedup → percentile tiers → stop resolution → tier rotation → (optional)
//! multi-axis fusion. Nothing in here performs I/O, so every stage is safe
//! to re-run on any state change.

pub mod dedup;
pub mod fuse;
pub mod rotate;
pub mod stops;
pub mod tiers;

pub use dedup::dedup_max;
pub use fuse::fuse_axis_orderings;
pub use rotate::{order_for_side, rotate_tiers};
pub use stops::{resolve_stop, Polarity, StopPoint};
pub use tiers::{partition, sort_by_score_desc, TierSet, TIER_COUNT};
