#![cfg(feature = "collection")]
//! Tests for the membership hasher behind set algebra.
//!
//! Run with `--features fxhash` or `--features ahash` to exercise the
//! alternative hashers. Results must not depend on which hasher is compiled
//! in: ordering comes from the input, never from hash iteration order.

use effp::collection::{deduplicate, difference, intersection, union};
use rstest::rstest;

// =============================================================================
// Referential Transparency Tests
// =============================================================================

/// The same input always yields the same output, regardless of hasher seeding.
#[rstest]
fn test_repeated_calls_are_identical() {
    let input: Vec<String> = (0..500).map(|i| format!("key_{}", i % 97)).collect();

    let first = deduplicate(&input);
    let second = deduplicate(&input);

    assert_eq!(first, second);
    assert_eq!(first.map(|keys| keys.len()), Some(97));
}

/// Output order follows the input even when hashing would scatter it.
#[rstest]
fn test_order_independent_of_hash_order() {
    let input: Vec<i64> = (0..1_000).rev().collect();
    let expected: Vec<i64> = (0..1_000).rev().collect();

    assert_eq!(deduplicate(&input), Some(expected));
}

// =============================================================================
// Large Scale Tests (hash function stress test)
// =============================================================================

#[rstest]
fn test_large_scale_set_algebra() {
    const COUNT: i32 = 10_000;

    let evens: Vec<i32> = (0..COUNT).map(|x| x * 2).collect();
    let multiples_of_three: Vec<i32> = (0..COUNT).map(|x| x * 3).collect();

    let both = intersection(&evens, &multiples_of_three).unwrap_or_default();
    assert!(both.iter().all(|value| value % 6 == 0));
    assert_eq!(both.first(), Some(&0));

    let only_even = difference(&evens, &multiples_of_three).unwrap_or_default();
    assert!(only_even.iter().all(|value| value % 6 != 0));

    let all = union(&evens, &multiples_of_three).unwrap_or_default();
    assert_eq!(all.len(), evens.len() + multiples_of_three.len() - both.len());
}

#[rstest]
fn test_string_keys_large_scale() {
    const COUNT: usize = 1_000;

    let keys: Vec<String> = (0..COUNT).map(|i| format!("key_{i}")).collect();
    let doubled: Vec<String> = keys.iter().chain(&keys).cloned().collect();

    assert_eq!(deduplicate(&doubled), Some(keys));
}
