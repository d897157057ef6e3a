//! Tests for seed derivation and the seeded generator contract

use fenix::entropy::{SeededRng, derive_seed, execution_hash};

const IDENTITY: &str = "f8c06f7e-0a8a-4d75-9f25-5e5fb8d2a6d3";

#[test]
fn test_execution_hash_is_crc32_ieee() {
    assert_eq!(execution_hash("123456789"), 0xcbf4_3926);
    assert_eq!(execution_hash(IDENTITY), 2_079_321_417);
    assert_eq!(execution_hash(""), 0);
}

#[test]
fn test_seed_without_execution_entropy_is_extra() {
    assert_eq!(derive_seed(IDENTITY, false, 0), 0);
    assert_eq!(derive_seed(IDENTITY, false, 77), 77);
}

#[test]
fn test_seed_with_execution_entropy_adds_hash() {
    assert_eq!(derive_seed(IDENTITY, true, 0), 2_079_321_417);
    assert_eq!(derive_seed(IDENTITY, true, 5), 2_079_321_422);
}

#[test]
fn test_seed_addition_wraps() {
    assert_eq!(derive_seed("123456789", true, u64::MAX), 0xcbf4_3926 - 1);
}

#[test]
fn test_seed_ignores_identity_when_disabled() {
    assert_eq!(derive_seed("a", false, 3), derive_seed("b", false, 3));
}

#[test]
fn test_golden_draws() {
    let digits = |seed: u64, width: u32| {
        let mut rng = SeededRng::new(seed);
        format!("{:0width$}", rng.below(10u64.pow(width)), width = width as usize)
    };
    assert_eq!(digits(0, 5), "36832");
    assert_eq!(digits(1, 3), "555");
    assert_eq!(digits(2, 3), "172");
    assert_eq!(digits(8, 3), "386");
}

#[test]
fn test_same_seed_same_sequence() {
    let mut first = SeededRng::new(12_345);
    let mut second = SeededRng::new(12_345);
    for _ in 0..100 {
        assert_eq!(first.next_u64(), second.next_u64());
    }
}

#[test]
fn test_for_index_adds_index_to_seed() {
    let mut from_index = SeededRng::for_index(10, 5);
    let mut from_seed = SeededRng::new(15);
    assert_eq!(from_index.next_u64(), from_seed.next_u64());

    let mut negative = SeededRng::for_index(10, -5);
    let mut expected = SeededRng::new(5);
    assert_eq!(negative.next_u64(), expected.next_u64());
}
