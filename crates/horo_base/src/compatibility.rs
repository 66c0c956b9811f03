//! Compatibility score between two signs.
//!
//! The score is a random base in [0.5, 1.0] plus fixed bonuses for a shared
//! element and a shared quality, capped at 1.0. Repeated calls with the same
//! signs give different scores unless the RNG is replayed.

use rand::Rng;

use crate::zodiac::Sign;

/// Lower bound of the random base.
pub const BASE_MIN: f64 = 0.5;
/// Upper bound of the random base, also the score cap.
pub const BASE_MAX: f64 = 1.0;
/// Bonus when both signs share an element.
pub const ELEMENT_BONUS: f64 = 0.1;
/// Bonus when both signs share a quality.
pub const QUALITY_BONUS: f64 = 0.1;

/// Deterministic part of the score.
pub fn affinity_bonus(a: Sign, b: Sign) -> f64 {
    let mut bonus = 0.0;
    if a.element() == b.element() {
        bonus += ELEMENT_BONUS;
    }
    if a.quality() == b.quality() {
        bonus += QUALITY_BONUS;
    }
    bonus
}

/// Score in [0, 1].
pub fn compatibility<R: Rng>(a: Sign, b: Sign, rng: &mut R) -> f64 {
    let base = rng.random_range(BASE_MIN..=BASE_MAX);
    let score = (base + affinity_bonus(a, b)).min(BASE_MAX);
    tracing::debug!(
        a = a.western_name(),
        b = b.western_name(),
        base,
        score,
        "compatibility"
    );
    score
}
