//! Construction parameters for [`OpenSet`](super::OpenSet).
//!
//! The capacity is a hard cap: the slot array is allocated once and never
//! grows. The duplicate-check policy selects how much of the probe chain an
//! insert inspects before placing a new element.

/// How far `insert` looks for an equal element before placing a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicateCheck {
    /// Compare against the natural slot only.
    ///
    /// An equal element that was displaced further along the probe chain
    /// (because its natural slot was taken when it arrived) goes
    /// undetected, and the new copy is inserted as well. Kept for callers
    /// that need the narrow check's exact slot layout.
    ///
    /// Set equality and the set-level hash are only lawful under
    /// [`ProbeChain`](Self::ProbeChain). With a stored duplicate, `==` can
    /// hold one way and fail the other.
    NaturalSlot,
    /// Walk the probe chain from the natural slot to the first empty slot.
    ///
    /// This is sufficient because nothing is ever removed: an element is
    /// always stored before the first empty slot of its own probe chain.
    #[default]
    ProbeChain,
}

/// Capacity and insertion policy for an [`OpenSet`](super::OpenSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenSetConfig {
    /// Number of slots, and therefore the maximum number of elements.
    ///
    /// Must be in `1..=MAX_CAPACITY`.
    pub capacity: usize,

    /// Duplicate detection policy used by `insert`/`add`.
    /// Default: [`DuplicateCheck::ProbeChain`].
    pub duplicate_check: DuplicateCheck,
}

impl OpenSetConfig {
    /// Largest accepted capacity.
    ///
    /// Natural slots are computed in signed 64-bit arithmetic, and no slice
    /// can hold more than `isize::MAX` elements, so this bound satisfies
    /// both.
    pub const MAX_CAPACITY: usize = isize::MAX as usize;

    /// General-purpose defaults: 1024 slots, full probe-chain check.
    pub const DEFAULT: Self = Self::new(1024);

    /// A config with the given capacity and the default duplicate check.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            duplicate_check: DuplicateCheck::ProbeChain,
        }
    }

    /// A config that checks only the natural slot on insert.
    pub const fn reference(capacity: usize) -> Self {
        Self {
            capacity,
            duplicate_check: DuplicateCheck::NaturalSlot,
        }
    }

    pub const fn with_duplicate_check(self, duplicate_check: DuplicateCheck) -> Self {
        Self {
            capacity: self.capacity,
            duplicate_check,
        }
    }

    /// Validates the configuration.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero or above [`Self::MAX_CAPACITY`]
    /// (indicates a configuration bug).
    #[track_caller]
    pub const fn validate(&self) {
        assert!(self.capacity > 0, "capacity must be > 0");
        assert!(
            self.capacity <= Self::MAX_CAPACITY,
            "capacity exceeds MAX_CAPACITY"
        );
    }

    /// Non-panicking validation for runtime configuration.
    ///
    /// Returns a short, static error string suitable for surfacing in
    /// configuration diagnostics.
    #[must_use = "check config validity before use"]
    pub const fn try_validate(&self) -> Result<(), &'static str> {
        if self.capacity == 0 {
            return Err("capacity must be > 0");
        }
        if self.capacity > Self::MAX_CAPACITY {
            return Err("capacity exceeds MAX_CAPACITY");
        }
        Ok(())
    }
}

impl Default for OpenSetConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const _: () = OpenSetConfig::DEFAULT.validate();
const _: () = assert!(OpenSetConfig::MAX_CAPACITY as u64 <= i64::MAX as u64);
