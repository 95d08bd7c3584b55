//! Concrete slot-layout scenarios.
//!
//! `IdentityState` makes each integer its own hash, so the natural slot of
//! `k` is `k mod capacity` and the expected layout can be written down by
//! hand.

use std::hash::{Hash, Hasher};

use probe_set::{IdentityState, Insert, OpenSet, OpenSetConfig};

/// Element with a caller-chosen hash and a separate identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Keyed {
    name: &'static str,
    hash: i64,
}

impl Hash for Keyed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash);
    }
}

fn keyed(name: &'static str, hash: i64) -> Keyed {
    Keyed { name, hash }
}

fn identity_set<T>(capacity: usize) -> OpenSet<T, IdentityState> {
    OpenSet::with_hasher(capacity, IdentityState).unwrap()
}

#[test]
fn capacity_five_resolves_collisions_forward() {
    let mut set = identity_set(5);

    assert_eq!(set.insert(10i64), Insert::Inserted { slot: 0 });
    assert_eq!(set.insert(15), Insert::Inserted { slot: 1 });
    assert_eq!(set.insert(3), Insert::Inserted { slot: 3 });
    assert_eq!(set.insert(8), Insert::Inserted { slot: 4 });

    assert_eq!(set.len(), 4);
    for k in [10i64, 15, 3, 8] {
        assert!(set.contains(&k), "{k} missing");
    }
    assert_eq!(set.find(&10), Some(0));
    assert_eq!(set.find(&15), Some(1));
    assert_eq!(set.find(&3), Some(3));
    assert_eq!(set.find(&8), Some(4));

    // Natural slot 0; 0 and 1 are taken, so a fifth element goes to 2.
    assert!(!set.contains(&20));
    assert_eq!(set.insert(20), Insert::Inserted { slot: 2 });
    assert!(set.is_full());
    assert!(set.contains(&20));
}

#[test]
fn capacity_five_with_distinct_elements_sharing_hashes() {
    let mut set = identity_set(5);
    let a = keyed("a", 10);
    let b = keyed("b", 15);
    let c = keyed("c", 3);
    let d = keyed("d", 8);

    for e in [a, b, c, d] {
        assert!(set.add(e));
    }
    assert_eq!(set.find(&a), Some(0));
    assert_eq!(set.find(&b), Some(1));
    assert_eq!(set.find(&c), Some(3));
    assert_eq!(set.find(&d), Some(4));

    // Same hash as `a`, different element.
    assert!(!set.contains(&keyed("e", 20)));
    assert!(!set.contains(&keyed("a2", 10)));
}

#[test]
fn capacity_two_fills_then_rejects() {
    let mut set = identity_set(2);
    assert!(set.add(keyed("x", 1)));
    assert!(set.add(keyed("y", 1)));
    assert_eq!(set.len(), 2);

    assert_eq!(set.insert(keyed("z", 7)), Insert::Full);
    assert!(!set.add(keyed("x", 1)));
    assert_eq!(set.len(), 2);
}

#[test]
fn negative_hashes_land_in_range() {
    let mut set = identity_set(5);
    assert_eq!(set.insert(-3i64), Insert::Inserted { slot: 2 });
    assert_eq!(set.insert(-5), Insert::Inserted { slot: 0 });
    assert_eq!(set.insert(-8), Insert::Inserted { slot: 3 });
    assert_eq!(set.insert(i64::MIN), Insert::Inserted { slot: 4 });
    for k in [-3i64, -5, -8, i64::MIN] {
        assert!(set.contains(&k));
    }
    assert!(!set.contains(&-1));
}

#[test]
fn immediate_duplicate_at_natural_slot_is_rejected_by_both_policies() {
    for config in [OpenSetConfig::new(4), OpenSetConfig::reference(4)] {
        let mut set = OpenSet::with_config_and_hasher(config, IdentityState).unwrap();
        assert!(set.add(keyed("a", 6)));
        assert_eq!(set.insert(keyed("a", 6)), Insert::Duplicate { slot: 2 });
        assert_eq!(set.len(), 1);
    }
}

#[test]
fn displaced_duplicate_slips_past_natural_slot_check() {
    let mut set =
        OpenSet::with_config_and_hasher(OpenSetConfig::reference(4), IdentityState).unwrap();
    let first = keyed("first", 1);
    let second = keyed("second", 1);

    assert!(set.add(first)); // slot 1
    assert!(set.add(second)); // slot 2
    // Natural slot 1 holds `first`, so the narrow check misses `second` in
    // slot 2 and stores another copy in slot 3.
    assert_eq!(set.insert(second), Insert::Inserted { slot: 3 });
    assert_eq!(set.len(), 3);
    assert_eq!(set.find(&second), Some(2));
}

#[test]
fn displaced_duplicate_is_caught_by_probe_chain_check() {
    let mut set = identity_set(4);
    let first = keyed("first", 1);
    let second = keyed("second", 1);

    assert!(set.add(first));
    assert!(set.add(second));
    assert_eq!(set.insert(second), Insert::Duplicate { slot: 2 });
    assert_eq!(set.len(), 2);
}

#[test]
fn probe_wraps_past_end_of_table() {
    let mut set = identity_set(3);
    assert_eq!(set.insert(keyed("p", 2)).slot(), Some(2));
    assert_eq!(set.insert(keyed("q", 2)).slot(), Some(0));
    assert_eq!(set.insert(keyed("r", 5)).slot(), Some(1));
    assert!(set.contains(&keyed("q", 2)));
    assert!(set.contains(&keyed("r", 5)));
}
