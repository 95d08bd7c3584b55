//! Counter helpers for the `stats` feature.
//!
//! Probe counters saturate rather than wrap: a long-lived set that somehow
//! overflows a `u64` should report `u64::MAX`, not a small number.

/// Saturating add for a `u64` counter.
#[inline(always)]
pub fn sat_add_u64(counter: &mut u64, delta: u64) {
    *counter = counter.saturating_add(delta);
}

/// High-water-mark update for a `u64` counter (longest probe seen).
#[inline(always)]
pub fn max_u64(counter: &mut u64, value: u64) {
    *counter = (*counter).max(value);
}
