//! Uniform selection of value kinds.

use fixture_core::{Kind, ALL_KINDS, PRIMITIVE_KINDS};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one kind uniformly from `allowed`, or from every kind when empty.
///
/// Selections are independent; duplicates in `allowed` weight that kind.
pub fn choose_kind<R: Rng>(rng: &mut R, allowed: &[Kind]) -> Kind {
    let pool = if allowed.is_empty() { ALL_KINDS } else { allowed };
    // `pool` is never empty.
    pool.choose(rng).copied().unwrap_or(Kind::Number)
}

/// Pick any kind uniformly.
pub fn random_kind<R: Rng>(rng: &mut R) -> Kind {
    choose_kind(rng, ALL_KINDS)
}

/// Kinds a slot may take once composites are no longer allowed.
///
/// Keeps the primitive part of the caller's preference; if the preference
/// has no primitives (or is empty) every primitive kind is allowed.
pub fn primitive_fallback(preference: &[Kind]) -> Vec<Kind> {
    let kept: Vec<Kind> = preference
        .iter()
        .copied()
        .filter(|k| !k.is_composite())
        .collect();
    if kept.is_empty() {
        PRIMITIVE_KINDS.to_vec()
    } else {
        kept
    }
}
