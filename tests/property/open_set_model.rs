//! `OpenSet` against a naive model.
//!
//! The model is a `HashSet` plus the capacity cap: an add succeeds exactly
//! when the element is new and the table is not yet full.

use std::collections::HashSet;

use proptest::prelude::*;

use probe_set::{DuplicateCheck, IdentityState, Insert, OpenSet, OpenSetConfig};

fn config_strategy() -> impl Strategy<Value = OpenSetConfig> {
    // Small capacities keep the tables crowded so probes wrap and collide.
    (1usize..24).prop_map(OpenSetConfig::new)
}

const PROPTEST_CASES: u32 = 64;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(crate::proptest_cases(PROPTEST_CASES)))]

    #[test]
    fn adds_match_bounded_model(
        config in config_strategy(),
        keys in prop::collection::vec(any::<u16>(), 0..64),
    ) {
        let mut set = OpenSet::with_config(config).unwrap();
        let mut model = HashSet::new();

        for key in keys {
            let expected = if model.len() == config.capacity {
                Insert::Full
            } else if model.contains(&key) {
                // Slot is layout-dependent; only the variant is checked.
                Insert::Duplicate { slot: 0 }
            } else {
                Insert::Inserted { slot: 0 }
            };

            let got = set.insert(key);
            prop_assert_eq!(
                std::mem::discriminant(&got),
                std::mem::discriminant(&expected),
                "insert({}) gave {:?}", key, got
            );
            if got.is_inserted() {
                model.insert(key);
            }
            prop_assert!(set.len() <= set.capacity());
            prop_assert_eq!(set.len(), model.len());
        }

        for key in &model {
            prop_assert!(set.contains(key));
        }
    }

    #[test]
    fn never_added_elements_are_absent(
        cap in 1usize..32,
        added in prop::collection::hash_set(0i64..1000, 0..32),
        probes in prop::collection::vec(1000i64..2000, 1..16),
    ) {
        let mut set = OpenSet::with_hasher(cap, IdentityState).unwrap();
        for k in &added {
            let _ = set.add(*k);
        }
        for k in probes {
            prop_assert!(!set.contains(&k));
            prop_assert!(set.find(&k).is_none());
        }
    }

    #[test]
    fn insertion_order_does_not_affect_equality(
        keys in prop::collection::hash_set(any::<i32>(), 1..24),
        seed in any::<u64>(),
    ) {
        let ordered: Vec<i32> = keys.iter().copied().collect();
        let mut shuffled = ordered.clone();
        // Deterministic Fisher-Yates from the seed.
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            shuffled.swap(i, (state % (i as u64 + 1)) as usize);
        }

        let mut a = OpenSet::new(ordered.len()).unwrap();
        let mut b = OpenSet::new(ordered.len() * 2).unwrap();
        for k in &ordered {
            prop_assert!(a.add(*k));
        }
        for k in &shuffled {
            prop_assert!(b.add(*k));
        }

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn differing_member_means_unequal(
        keys in prop::collection::hash_set(0u32..10_000, 1..24),
        replacement in 10_000u32..20_000,
    ) {
        let keys: Vec<u32> = keys.into_iter().collect();
        let mut a = OpenSet::new(keys.len()).unwrap();
        let mut b = OpenSet::new(keys.len()).unwrap();
        for k in &keys {
            prop_assert!(a.add(*k));
        }
        for k in &keys[1..] {
            prop_assert!(b.add(*k));
        }
        prop_assert!(b.add(replacement));

        prop_assert_eq!(a.len(), b.len());
        prop_assert_ne!(&a, &b);
        prop_assert_ne!(&b, &a);
    }

    #[test]
    fn natural_slot_policy_never_loses_elements(
        cap in 1usize..24,
        keys in prop::collection::vec(-32i64..32, 0..48),
    ) {
        // The narrow check may store extra copies, but anything it accepted
        // must still be found and len stays bounded.
        let config = OpenSetConfig::reference(cap);
        let mut set = OpenSet::with_config_and_hasher(config, IdentityState).unwrap();
        prop_assert_eq!(set.duplicate_check(), DuplicateCheck::NaturalSlot);

        let mut accepted = Vec::new();
        for k in keys {
            if set.add(k) {
                accepted.push(k);
            }
            prop_assert!(set.len() <= cap);
        }
        prop_assert_eq!(set.len(), accepted.len());
        for k in accepted {
            prop_assert!(set.contains(&k));
        }
    }
}
