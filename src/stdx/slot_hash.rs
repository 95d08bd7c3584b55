//! Slot selection for open-addressing tables.
//!
//! Hashes are produced by a [`BuildHasher`] as `u64` and then read as a
//! signed `i64`, so a table sees the same range of "natural" hash values a
//! caller-supplied integer hash would have. The natural slot is the
//! Euclidean remainder of that signed value by the table capacity, which is
//! always in `[0, capacity)`. A sign-preserving `%` would hand back a
//! negative offset for negative hashes.

use std::hash::{BuildHasher, Hasher};

/// Fixed seeds for [`SeededState`].
///
/// Digits of pi, same as most fixed-seed aHash setups. Any constants work;
/// they only need to be identical for every set in the process so that
/// `content_hash` values are comparable.
const SEED_0: u64 = 0x243f_6a88_85a3_08d3;
const SEED_1: u64 = 0x1319_8a2e_0370_7344;
const SEED_2: u64 = 0xa409_3822_299f_31d0;
const SEED_3: u64 = 0x082e_fa98_ec4e_6c89;

/// Multiplier used when an [`IdentityHasher`] sees more than one write.
const IDENTITY_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Maps a signed hash onto a slot index in `[0, capacity)`.
///
/// `capacity` must be non-zero and no larger than `i64::MAX`; table
/// constructors enforce both.
#[inline]
pub fn natural_index(hash: i64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "natural_index on an empty table");
    debug_assert!(capacity as u64 <= i64::MAX as u64);
    hash.rem_euclid(capacity as i64) as usize
}

/// Next slot in linear-probe order, wrapping at `capacity`.
#[inline]
pub fn probe_next(idx: usize, capacity: usize) -> usize {
    let next = idx + 1;
    if next == capacity {
        0
    } else {
        next
    }
}

/// Deterministic aHash state with fixed seeds.
///
/// This is the default hasher for [`OpenSet`](super::OpenSet). Unlike
/// `std`'s `RandomState`, two independently constructed `SeededState`s
/// hash every value identically, which keeps the set-level hash stable
/// across instances built in the same process.
#[derive(Clone, Debug)]
pub struct SeededState(ahash::RandomState);

impl SeededState {
    pub fn new() -> Self {
        Self(ahash::RandomState::with_seeds(SEED_0, SEED_1, SEED_2, SEED_3))
    }
}

impl Default for SeededState {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildHasher for SeededState {
    type Hasher = ahash::AHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        self.0.build_hasher()
    }
}

/// [`BuildHasher`] for [`IdentityHasher`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityState;

impl BuildHasher for IdentityState {
    type Hasher = IdentityHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}

/// Pass-through hasher for keys that are already hashes.
///
/// A single integer write is returned unchanged by `finish`. Signed writes
/// are sign-extended, so `-3i32` finishes as `-3i64 as u64` and lands in the
/// same natural slot as the integer `-3`. Further writes (and raw byte
/// writes) are folded in with a multiplicative mix; such keys still hash
/// consistently, just not to themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityHasher {
    state: u64,
    written: bool,
}

impl IdentityHasher {
    #[inline]
    fn mix(&mut self, value: u64) {
        self.state = if self.written {
            (self.state.rotate_left(5) ^ value).wrapping_mul(IDENTITY_MIX)
        } else {
            value
        };
        self.written = true;
    }
}

impl Hasher for IdentityHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.mix(u64::from_le_bytes(word));
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.mix(i as u64);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.mix(i as u64);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.mix(i as u64);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.mix(i);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.mix(i as u64);
    }

    #[inline]
    fn write_i8(&mut self, i: i8) {
        self.mix(i as i64 as u64);
    }

    #[inline]
    fn write_i16(&mut self, i: i16) {
        self.mix(i as i64 as u64);
    }

    #[inline]
    fn write_i32(&mut self, i: i32) {
        self.mix(i as i64 as u64);
    }

    #[inline]
    fn write_i64(&mut self, i: i64) {
        self.mix(i as u64);
    }

    #[inline]
    fn write_isize(&mut self, i: isize) {
        self.mix(i as i64 as u64);
    }
}
