//! A fixed-capacity set using open addressing with linear probing.
//!
//! The table is a single flat array of `capacity` slots, each either empty
//! or holding one element. Collisions are resolved by scanning forward one
//! slot at a time with wraparound; there is no chaining and no tombstone
//! state, because elements are never removed. The table never grows: once
//! every slot is occupied, further inserts are rejected.
//!
//! Lookups use *full-cycle termination*: a probe stops on a match or after
//! it has come back around to its natural slot, not at the first empty
//! slot. A miss therefore costs O(capacity). Inserts, by contrast, always
//! stop at the first empty slot.

use std::borrow::Borrow;
#[cfg(feature = "stats")]
use std::cell::Cell;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;
use std::ptr;

#[cfg(feature = "stats")]
use crate::perf_stats::{max_u64, sat_add_u64};

use super::open_set_error::OpenSetError;
use super::open_set_limits::{DuplicateCheck, OpenSetConfig};
use super::slot_hash::{natural_index, probe_next, SeededState};

/// One cell of the backing array.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Slot<T> {
    /// Slot is available for insertion.
    Empty,
    /// Slot holds the given element.
    Occupied(T),
}

impl<T> Slot<T> {
    #[inline]
    fn get(&self) -> Option<&T> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(value) => Some(value),
        }
    }

    #[inline]
    fn holds<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self {
            Slot::Empty => false,
            Slot::Occupied(stored) => stored.borrow() == value,
        }
    }
}

/// Outcome of [`OpenSet::insert`].
///
/// [`OpenSet::add`] collapses this to a `bool`, which cannot tell a
/// duplicate from a full table. Use `insert` when the caller needs to know
/// which one happened.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Insert {
    /// The element was stored at `slot`.
    Inserted { slot: usize },
    /// An equal element already occupies `slot`; nothing changed.
    Duplicate { slot: usize },
    /// Every slot is occupied; nothing changed.
    Full,
}

impl Insert {
    #[inline]
    pub fn is_inserted(self) -> bool {
        matches!(self, Insert::Inserted { .. })
    }

    /// Slot holding the element after the call, if it is in the table.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        match self {
            Insert::Inserted { slot } | Insert::Duplicate { slot } => Some(slot),
            Insert::Full => None,
        }
    }
}

/// Probe counters, recorded when the `stats` feature is enabled.
#[cfg(feature = "stats")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenSetStats {
    /// Successful inserts.
    pub inserted: u64,
    /// Inserts rejected because an equal element was found.
    pub duplicates: u64,
    /// Inserts rejected because the table was full.
    pub full_rejections: u64,
    /// Calls to `find` (and therefore `contains`/`get`).
    pub lookups: u64,
    /// Lookups that found nothing after a full cycle.
    pub lookup_misses: u64,
    /// Slots visited across all inserts and lookups.
    pub probe_steps: u64,
    /// Longest single probe, in slots visited.
    pub max_probe_len: u64,
}

#[cfg(not(feature = "stats"))]
type StatsCell = ();

#[cfg(feature = "stats")]
type StatsCell = Cell<OpenSetStats>;

#[cfg(feature = "stats")]
#[inline]
fn record_probe(stats: &mut OpenSetStats, visited: u64) {
    sat_add_u64(&mut stats.probe_steps, visited);
    max_u64(&mut stats.max_probe_len, visited);
}

/// Where an insert probe ended.
enum Placement {
    Vacant(usize),
    Duplicate(usize),
    Exhausted,
}

/// A fixed-capacity hash set with open addressing and linear probing.
///
/// - Capacity is set at construction and never changes.
/// - `add`/`insert` place new elements at the first empty slot at or after
///   the element's natural slot, wrapping at the end of the table.
/// - `contains` scans until a match or a full cycle.
/// - Two sets are equal when they hold the same number of elements and
///   every element of one is found in the other.
/// - The set's own hash is the wrapping sum of its elements' hashes, so it
///   does not depend on slot layout.
///
/// Elements must have `Eq` and `Hash` impls that agree (`a == b` implies
/// equal hashes). The set does not detect violations.
///
/// # Example
///
/// ```
/// use probe_set::stdx::OpenSet;
///
/// let mut set = OpenSet::new(4)?;
/// assert!(set.add("alpha"));
/// assert!(!set.add("alpha"));
/// assert!(set.contains("alpha"));
/// assert_eq!(set.len(), 1);
/// # Ok::<(), probe_set::stdx::OpenSetError>(())
/// ```
pub struct OpenSet<T, S = SeededState> {
    /// Backing storage; its length is the capacity.
    slots: Box<[Slot<T>]>,
    /// Number of occupied slots.
    len: usize,
    duplicate_check: DuplicateCheck,
    hasher: S,
    #[cfg_attr(not(feature = "stats"), allow(dead_code))]
    stats: StatsCell,
}

impl<T> OpenSet<T, SeededState> {
    /// Creates an empty set with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`OpenSetError::InvalidCapacity`] if `capacity` is zero or
    /// above [`OpenSetConfig::MAX_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self, OpenSetError> {
        Self::with_config_and_hasher(OpenSetConfig::new(capacity), SeededState::new())
    }

    /// Creates an empty set from a config, using the default hasher.
    pub fn with_config(config: OpenSetConfig) -> Result<Self, OpenSetError> {
        Self::with_config_and_hasher(config, SeededState::new())
    }
}

impl<T, S> OpenSet<T, S> {
    /// Creates an empty set with `capacity` slots and the given hasher.
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self, OpenSetError> {
        Self::with_config_and_hasher(OpenSetConfig::new(capacity), hasher)
    }

    pub fn with_config_and_hasher(config: OpenSetConfig, hasher: S) -> Result<Self, OpenSetError> {
        config
            .try_validate()
            .map_err(|detail| OpenSetError::InvalidCapacity {
                capacity: config.capacity,
                detail,
            })?;

        let slot_bytes = mem::size_of::<Slot<T>>();
        match config.capacity.checked_mul(slot_bytes) {
            Some(total) if total <= isize::MAX as usize => {}
            _ => {
                return Err(OpenSetError::CapacityOverflow {
                    capacity: config.capacity,
                    slot_bytes,
                })
            }
        }

        let slots: Box<[Slot<T>]> = (0..config.capacity).map(|_| Slot::Empty).collect();

        Ok(Self {
            slots,
            len: 0,
            duplicate_check: config.duplicate_check,
            hasher,
            stats: Default::default(),
        })
    }

    /// Returns the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Number of inserts that can still succeed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.len
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    #[inline]
    pub fn duplicate_check(&self) -> DuplicateCheck {
        self.duplicate_check
    }

    /// Returns a snapshot of the probe counters.
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> OpenSetStats {
        self.stats.get()
    }

    #[cfg(feature = "stats")]
    #[inline]
    fn record(&self, update: impl FnOnce(&mut OpenSetStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }

    /// Occupied elements in slot order. Internal only.
    fn occupied(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(Slot::get)
    }
}

impl<T, S> OpenSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Natural slot of `value`: its hash, read as signed, modulo capacity.
    #[inline]
    fn natural_slot<Q: Hash + ?Sized>(&self, value: &Q) -> usize {
        natural_index(self.hasher.hash_one(value) as i64, self.slots.len())
    }

    /// Adds an element. Returns `true` if it was stored.
    ///
    /// Returns `false` without modifying the set when the table is full or
    /// an equal element is detected (see [`DuplicateCheck`] for how far the
    /// check looks).
    #[inline]
    pub fn add(&mut self, value: T) -> bool {
        self.insert(value).is_inserted()
    }

    /// Adds an element, reporting exactly what happened.
    ///
    /// On success exactly one empty slot becomes occupied and `len` grows by
    /// one. Otherwise the set is unchanged and `value` is dropped.
    pub fn insert(&mut self, value: T) -> Insert {
        if self.is_full() {
            #[cfg(feature = "stats")]
            self.record(|s| sat_add_u64(&mut s.full_rejections, 1));
            return Insert::Full;
        }

        let natural = self.natural_slot(&value);
        match self.place(natural, &value) {
            Placement::Vacant(slot) => {
                self.slots[slot] = Slot::Occupied(value);
                self.len += 1;
                debug_assert!(self.len <= self.slots.len());
                #[cfg(feature = "stats")]
                self.record(|s| sat_add_u64(&mut s.inserted, 1));
                Insert::Inserted { slot }
            }
            Placement::Duplicate(slot) => {
                #[cfg(feature = "stats")]
                self.record(|s| sat_add_u64(&mut s.duplicates, 1));
                Insert::Duplicate { slot }
            }
            Placement::Exhausted => {
                // `len < capacity` guarantees an empty slot somewhere.
                debug_assert!(false, "open set probe exhaustion with len < capacity");
                Insert::Full
            }
        }
    }

    /// Walks the probe chain from `natural` to the first empty slot.
    ///
    /// Under `NaturalSlot` only the first visited slot is compared; under
    /// `ProbeChain` every occupied slot on the way is.
    fn place(&self, natural: usize, value: &T) -> Placement {
        let capacity = self.slots.len();
        let check_chain = self.duplicate_check == DuplicateCheck::ProbeChain;
        let mut idx = natural;

        for step in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => {
                    #[cfg(feature = "stats")]
                    self.record(|s| record_probe(s, step as u64 + 1));
                    return Placement::Vacant(idx);
                }
                Slot::Occupied(stored) if (step == 0 || check_chain) && stored == value => {
                    #[cfg(feature = "stats")]
                    self.record(|s| record_probe(s, step as u64 + 1));
                    return Placement::Duplicate(idx);
                }
                Slot::Occupied(_) => idx = probe_next(idx, capacity),
            }
        }

        Placement::Exhausted
    }

    /// Returns the slot index holding an element equal to `value`.
    ///
    /// Starts at the natural slot and scans forward with wraparound until a
    /// match, or until the scan is back at the natural slot. Empty slots do
    /// not end the scan.
    pub fn find<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.slots.len();
        let natural = self.natural_slot(value);
        let mut idx = natural;
        #[cfg(feature = "stats")]
        let mut visited = 0u64;

        loop {
            #[cfg(feature = "stats")]
            {
                visited += 1;
            }
            if self.slots[idx].holds(value) {
                #[cfg(feature = "stats")]
                self.record(|s| {
                    sat_add_u64(&mut s.lookups, 1);
                    record_probe(s, visited);
                });
                return Some(idx);
            }
            idx = probe_next(idx, capacity);
            if idx == natural {
                break;
            }
        }

        #[cfg(feature = "stats")]
        self.record(|s| {
            sat_add_u64(&mut s.lookups, 1);
            sat_add_u64(&mut s.lookup_misses, 1);
            record_probe(s, visited);
        });
        None
    }

    /// Returns `true` if the set contains an element equal to `value`.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(value).is_some()
    }

    /// Returns the stored element equal to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(value).and_then(|idx| self.slots[idx].get())
    }

    /// Wrapping sum of the hashes of all stored elements.
    ///
    /// Element hashes come from a fixed-seed [`SeededState`], not from the
    /// set's own hasher `S`, so the value depends only on which elements
    /// are present. Equal sets hash alike even when each was built with a
    /// per-instance seeded hasher such as std's `RandomState`. Empty slots
    /// contribute nothing.
    pub fn content_hash(&self) -> u64 {
        let state = SeededState::new();
        self.occupied()
            .fold(0u64, |acc, value| acc.wrapping_add(state.hash_one(value)))
    }
}

impl<T, S> PartialEq for OpenSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Equal lengths plus one-way containment.
    ///
    /// With no duplicates in either table, `other ⊆ self` and
    /// `|other| == |self|` imply `self == other`. Only
    /// [`DuplicateCheck::ProbeChain`] guarantees that. A set built with
    /// [`DuplicateCheck::NaturalSlot`] may hold a displaced duplicate, and
    /// then `==` is not symmetric and equal-looking sets may hash apart.
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        self.len == other.len && other.occupied().all(|value| self.contains(value))
    }
}

impl<T, S> Eq for OpenSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> Hash for OpenSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

impl<T: Clone, S: Clone> Clone for OpenSet<T, S> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
            duplicate_check: self.duplicate_check,
            hasher: self.hasher.clone(),
            stats: self.stats.clone(),
        }
    }
}

/// Debug view of occupied slots as `slot => element`.
struct OccupiedSlots<'a, T>(&'a [Slot<T>]);

impl<T: fmt::Debug> fmt::Debug for OccupiedSlots<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, slot)| slot.get().map(|value| (idx, value))),
            )
            .finish()
    }
}

impl<T: fmt::Debug, S> fmt::Debug for OpenSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenSet")
            .field("len", &self.len)
            .field("capacity", &self.slots.len())
            .field("duplicate_check", &self.duplicate_check)
            .field("slots", &OccupiedSlots(&self.slots))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Test module includes
// ---------------------------------------------------------------------------

#[cfg(any(all(test, feature = "stdx-proptest"), kani))]
#[path = "open_set_tests.rs"]
mod open_set_tests;
