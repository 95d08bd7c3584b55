//! Fixed-capacity open-addressing set and the pieces it is built from.

pub mod open_set;
pub mod open_set_error;
pub mod open_set_limits;
pub mod slot_hash;

#[cfg(feature = "stats")]
pub use open_set::OpenSetStats;
pub use open_set::{Insert, OpenSet};
pub use open_set_error::OpenSetError;
pub use open_set_limits::{DuplicateCheck, OpenSetConfig};
pub use slot_hash::{natural_index, IdentityHasher, IdentityState, SeededState};
