//! Tests for BitArray construction, single-bit access and random fill.

use everybit::{BitArray, EverybitError};
use proptest::prelude::*;
use rand::SeedableRng;

// =============================================================================
// Basic Construction and Lifecycle
// =============================================================================

#[test]
fn test_construction() {
    let ba = BitArray::new(1024).unwrap();
    assert_eq!(ba.bit_count(), 1024);
    assert_eq!(ba.num_set(), 0);
    assert!(ba.to_bools().iter().all(|&b| !b));
}

#[test]
fn test_construction_empty() {
    let mut ba = BitArray::new(0).unwrap();
    assert_eq!(ba.bit_count(), 0);
    assert_eq!(ba.to_string(), "");
    ba.rotate(0, 0, 5);
    ba.reverse(0, 0);
}

#[test]
fn test_construction_failure() {
    match BitArray::new(usize::MAX) {
        Err(EverybitError::AllocationFailed { .. }) => {}
        other => panic!("expected allocation failure, got {:?}", other),
    }
}

#[test]
fn test_free_twice() {
    let mut ba = BitArray::new(64).unwrap();
    ba.fill_random();
    ba.free();
    ba.free();
    assert_eq!(ba.bit_count(), 0);
    assert_eq!(ba.num_set(), 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_after_free() {
    let mut ba = BitArray::new(64).unwrap();
    ba.free();
    ba.get(0);
}

// =============================================================================
// Single Bit Operations
// =============================================================================

#[test]
fn test_set_get() {
    let mut ba = BitArray::new(1024).unwrap();
    ba.set(4, true);
    assert!(ba.get(4));
    assert!(!ba.get(5));
    assert_eq!(ba.num_set(), 1);

    ba.set(4, false);
    assert!(!ba.get(4));
    assert_eq!(ba.num_set(), 0);
}

#[test]
fn test_set_is_idempotent() {
    let mut ba = BitArray::new(16).unwrap();
    ba.set(9, true);
    ba.set(9, true);
    assert_eq!(ba.num_set(), 1);
    ba.set(9, false);
    ba.set(9, false);
    assert_eq!(ba.num_set(), 0);
}

#[test]
fn test_last_bit() {
    let mut ba = BitArray::new(13).unwrap();
    ba.set(12, true);
    assert!(ba.get(12));
    assert_eq!(ba.to_string(), "0000000000001");
}

#[test]
#[should_panic(expected = "bit index 13 out of bounds (bit count: 13)")]
fn test_set_out_of_bounds() {
    let mut ba = BitArray::new(13).unwrap();
    ba.set(13, true);
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn test_from_bools() {
    let bits = [true, false, false, true, true, false, true, false, true];
    let ba = BitArray::from_bools(&bits).unwrap();
    assert_eq!(ba.bit_count(), 9);
    assert_eq!(ba.to_bools(), bits.to_vec());
    assert_eq!(ba.to_string(), "100110101");
}

#[test]
fn test_parse_rejects_garbage() {
    let err = "0101 2".parse::<BitArray>().unwrap_err();
    assert_eq!(
        err,
        EverybitError::InvalidBitString {
            character: '2',
            position: 5
        }
    );
}

// =============================================================================
// Random Fill
// =============================================================================

#[test]
fn test_fill_random() {
    let mut ba = BitArray::new(4096).unwrap();
    ba.fill_random();
    // 4096 fair coin flips all landing the same way is not a realistic outcome
    assert!(ba.num_set() > 0);
    assert!(ba.num_set() < 4096);
}

#[test]
fn test_fill_random_seeded() {
    let mut ba0 = BitArray::new(1000).unwrap();
    let mut ba1 = BitArray::new(1000).unwrap();
    ba0.fill_random_with(&mut rand::rngs::StdRng::seed_from_u64(1));
    ba1.fill_random_with(&mut rand::rngs::StdRng::seed_from_u64(1));
    assert_eq!(ba0, ba1);

    ba1.fill_random_with(&mut rand::rngs::StdRng::seed_from_u64(2));
    assert_ne!(ba0, ba1);
}

#[test]
fn test_fill_random_density() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let mut ba = BitArray::new(1 << 16).unwrap();
    ba.fill_random_with(&mut rng);
    let set = ba.num_set();
    assert!(set > 30_000 && set < 35_536, "num_set {}", set);
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_set_get_consistency(bits in prop::collection::vec(any::<bool>(), 1..1000)) {
        let mut ba = BitArray::new(bits.len()).unwrap();
        for (i, &b) in bits.iter().enumerate() {
            ba.set(i, b);
        }

        for (i, &b) in bits.iter().enumerate() {
            prop_assert_eq!(ba.get(i), b);
        }
        prop_assert_eq!(ba.num_set(), bits.iter().filter(|&&b| b).count());
    }

    #[test]
    fn prop_set_touches_one_bit(n in 1..500usize, seed in any::<u64>(), idx in any::<prop::sample::Index>(), value in any::<bool>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut ba = BitArray::new(n).unwrap();
        ba.fill_random_with(&mut rng);
        let before = ba.to_bools();

        let i = idx.index(n);
        ba.set(i, value);

        for (k, &b) in before.iter().enumerate() {
            if k == i {
                prop_assert_eq!(ba.get(k), value);
            } else {
                prop_assert_eq!(ba.get(k), b);
            }
        }
    }

    #[test]
    fn prop_display_parse_roundtrip(n in 0..300usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut ba = BitArray::new(n).unwrap();
        ba.fill_random_with(&mut rng);

        let parsed: BitArray = ba.to_string().parse().unwrap();
        prop_assert_eq!(parsed, ba);
    }
}
