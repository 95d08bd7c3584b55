//! Error types for [`OpenSet`](super::OpenSet) construction.
//!
//! Only construction can fail. A full table and a rejected duplicate are
//! ordinary outcomes of `insert` (see [`Insert`](super::Insert)), not
//! errors.

use std::fmt;

/// Errors from building an [`OpenSet`](super::OpenSet).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OpenSetError {
    /// Capacity is zero or above the supported maximum.
    InvalidCapacity {
        capacity: usize,
        detail: &'static str,
    },
    /// The slot array for this capacity would exceed `isize::MAX` bytes.
    CapacityOverflow { capacity: usize, slot_bytes: usize },
}

impl fmt::Display for OpenSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { capacity, detail } => {
                write!(f, "invalid capacity {capacity}: {detail}")
            }
            Self::CapacityOverflow {
                capacity,
                slot_bytes,
            } => write!(
                f,
                "capacity {capacity} with {slot_bytes}-byte slots overflows the address space"
            ),
        }
    }
}

impl std::error::Error for OpenSetError {}
