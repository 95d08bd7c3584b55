#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;

use probe_set::{DuplicateCheck, IdentityState, Insert, OpenSet, OpenSetConfig};

// Interprets a byte stream as an operation sequence against `OpenSet`,
// checking every result against a `HashSet` ground-truth model bounded by
// the table capacity.
//
// Byte layout:
// - Byte 0 → `capacity` (clamped to 1..=255)
// - Byte 1 → policy (even: probe chain, odd: natural slot)
// - Remaining bytes as `(opcode, operand)` pairs, operand sign-extended so
//   negative hashes are exercised:
//   - 0 → `insert(operand)`
//   - 1 → `contains(operand)`
//   - 2 → `len()` / `is_full()`
//   - 3 → compare against a rebuilt copy (`==` and `content_hash`)
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize).max(1);
    let config = if data[1] % 2 == 0 {
        OpenSetConfig::new(capacity)
    } else {
        OpenSetConfig::reference(capacity)
    };
    let strict = config.duplicate_check == DuplicateCheck::ProbeChain;

    let mut set = OpenSet::with_config_and_hasher(config, IdentityState).unwrap();
    let mut model: HashSet<i64> = HashSet::new();
    let mut accepted = 0usize;

    let ops = &data[2..];
    let mut i = 0;
    while i + 1 < ops.len() {
        let opcode = ops[i];
        let key = ops[i + 1] as i8 as i64;
        i += 2;

        match opcode % 4 {
            // insert
            0 => {
                let full = accepted == capacity;
                let got = set.insert(key);
                if full {
                    assert_eq!(got, Insert::Full, "insert({key}) into full table");
                } else if strict {
                    assert_eq!(
                        got.is_inserted(),
                        !model.contains(&key),
                        "insert({key}) mismatch: got {got:?}"
                    );
                } else {
                    // Narrow check: a known member may be re-inserted, a new
                    // member must always be accepted.
                    if !model.contains(&key) {
                        assert!(got.is_inserted(), "insert({key}) rejected a new key");
                    }
                }
                if got.is_inserted() {
                    accepted += 1;
                    model.insert(key);
                }
            }
            // contains
            1 => {
                assert_eq!(
                    set.contains(&key),
                    model.contains(&key),
                    "contains({key}) mismatch"
                );
            }
            // len
            2 => {
                assert_eq!(set.len(), accepted, "len() mismatch");
                assert_eq!(set.is_full(), accepted == capacity, "is_full() mismatch");
            }
            // equality against a rebuilt strict copy
            _ => {
                if strict {
                    let mut copy = OpenSet::with_hasher(capacity, IdentityState).unwrap();
                    for k in &model {
                        assert!(copy.add(*k));
                    }
                    assert!(copy == set, "rebuilt copy differs");
                    assert_eq!(copy.content_hash(), set.content_hash());
                }
            }
        }
    }

    // Final consistency check.
    assert!(set.len() <= capacity, "len exceeds capacity");
    for k in &model {
        assert!(set.contains(k), "lost {k}");
    }
});
