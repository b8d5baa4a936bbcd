use crate::models::Side;

/// Whether an axis spans both poles or is pinned to the concept half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// A known opposite exists; the slider spans opposite (0.0) to
    /// concept (1.0).
    Dual,
    /// No opposite; the UI constrains the slider to [0.5, 1.0] and the
    /// position is remapped onto the full stop range.
    Single,
}

/// Discretized slider state: one of 10 stops plus the side it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopPoint {
    pub side: Side,
    /// Stop number in 1..=10.
    pub stop: u8,
}

/// Map a continuous axis position in [0,1] to a stop and side.
///
/// `position == 1.0` maps to stop 10, otherwise
/// `stop = floor(position * 10) + 1`. Stops 6..=10 land on the concept
/// side, 1..=5 on the opposite side, which keeps position 0.5 on the
/// concept side (stop 6) as the boundary case requires. Single-pole axes
/// remap [0.5, 1.0] onto the full range first and always resolve to the
/// concept side. Out-of-range positions are clamped.
pub fn resolve_stop(position: f32, polarity: Polarity) -> StopPoint {
    let position = position.clamp(0.0, 1.0);
    let position = match polarity {
        Polarity::Dual => position,
        Polarity::Single => (position.max(0.5) - 0.5) / 0.5,
    };

    let stop = if position >= 1.0 {
        10
    } else {
        (position * 10.0).floor() as u8 + 1
    };
    let stop = stop.clamp(1, 10);

    let side = match polarity {
        Polarity::Single => Side::Concept,
        Polarity::Dual => {
            if stop >= 6 {
                Side::Concept
            } else {
                Side::Opposite
            }
        }
    };

    StopPoint { side, stop }
}
