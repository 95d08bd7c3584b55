//! Fixed-capacity hash set with open addressing and linear probing.
//!
//! ## Scope
//! [`OpenSet`] stores hashable elements with no duplicates in a flat array
//! of slots whose length is fixed at construction. There is no resizing, no
//! removal and no iteration API; the set only answers "add" and "is it
//! there", and compares and hashes as a whole.
//!
//! ## Key invariants
//! - `len <= capacity` at all times; a full table rejects every insert.
//! - Every element sits at the first slot that was empty, at or after its
//!   natural slot, when it arrived. Natural slots come from a signed hash
//!   normalized into `[0, capacity)`.
//! - Under the default [`DuplicateCheck::ProbeChain`] policy no two slots
//!   hold equal elements.
//! - Lookups terminate after a full cycle of the table, not at the first
//!   empty slot.
//! - Set equality and the set-level hash depend only on which elements are
//!   present, never on slot layout.
//!
//! ## Notable entry points
//! - [`OpenSet::new`] / [`OpenSet::with_config_and_hasher`]: construction.
//! - [`OpenSet::add`] (bool) and [`OpenSet::insert`] ([`Insert`] outcome).
//! - [`OpenSet::contains`], [`OpenSet::find`], [`OpenSet::get`].
//! - [`OpenSet::content_hash`], plus `PartialEq`/`Eq`/`Hash` impls.
//! - [`OpenSetConfig`]: capacity and duplicate-check policy.
//!
//! ## Design trade-offs
//! [`DuplicateCheck::NaturalSlot`] compares only the natural slot on
//! insert. It is cheaper on crowded tables but admits a duplicate when the
//! earlier copy was displaced along the probe chain. `ProbeChain` closes
//! that gap at the cost of scanning to the first empty slot, which an insert
//! has to reach anyway.
//!
//! Full-cycle lookups make a miss O(capacity). Keep the load factor low if
//! negative lookups are common.

pub mod perf_stats;
pub mod stdx;

#[cfg(feature = "stats")]
pub use stdx::OpenSetStats;
pub use stdx::{
    DuplicateCheck, IdentityHasher, IdentityState, Insert, OpenSet, OpenSetConfig, OpenSetError,
    SeededState,
};
