//! Order-preserving set algebra over slices of hashable elements.
//!
//! Every operation is a single linear pass that borrows its inputs and
//! clones the selected elements into a fresh `Vec`. Membership is answered by
//! a transient hash set of references; ordering comes from the output `Vec`,
//! never from the hash set.
//!
//! # Empty Results
//!
//! An empty result is always `None`. No function in this module returns
//! `Some(vec![])`, so "no input" and "everything was filtered out" compare
//! equal.
//!
//! # Examples
//!
//! ```rust
//! use effp::collection::{deduplicate, difference, intersection, union};
//!
//! let first = [1, 2, 3, 4];
//! let second = [3, 4, 5, 6];
//!
//! assert_eq!(union(&first, &second), Some(vec![1, 2, 3, 4, 5, 6]));
//! assert_eq!(intersection(&first, &second), Some(vec![3, 4]));
//! assert_eq!(difference(&first, &second), Some(vec![1, 2]));
//! assert_eq!(difference(&first, &first), None);
//! assert_eq!(deduplicate::<i32>(&[]), None);
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// The result of a set algebra operation: `None` when no element survives.
pub type SetResult<T> = Option<Vec<T>>;

#[cfg(feature = "fxhash")]
type MembershipHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type MembershipHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type MembershipHasher = std::collections::hash_map::RandomState;

type MembershipSet<'a, T> = HashSet<&'a T, MembershipHasher>;

/// Builds the membership set for `elements`.
#[inline]
fn membership<T: Hash + Eq>(elements: &[T]) -> MembershipSet<'_, T> {
    elements.iter().collect()
}

#[inline]
fn non_empty<T>(elements: Vec<T>) -> SetResult<T> {
    (!elements.is_empty()).then_some(elements)
}

fn first_occurrences<'a, T, I>(elements: I) -> SetResult<T>
where
    T: Hash + Eq + Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    let (lower_bound, _) = elements.size_hint();
    let mut seen =
        MembershipSet::with_capacity_and_hasher(lower_bound, MembershipHasher::default());
    let unique = elements
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect();
    non_empty(unique)
}

/// Returns each distinct value of `input` once, in order of first occurrence.
///
/// # Examples
///
/// ```rust
/// use effp::collection::deduplicate;
///
/// assert_eq!(
///     deduplicate(&[1, 2, 2, 3, 4, 4, 5]),
///     Some(vec![1, 2, 3, 4, 5])
/// );
/// assert_eq!(deduplicate::<String>(&[]), None);
/// ```
pub fn deduplicate<T>(input: &[T]) -> SetResult<T>
where
    T: Hash + Eq + Clone,
{
    first_occurrences(input.iter())
}

/// Returns the distinct values of `first` followed by the distinct values of
/// `second` not already present.
///
/// Equivalent to deduplicating the concatenation of both inputs, without
/// building the concatenation.
///
/// # Examples
///
/// ```rust
/// use effp::collection::union;
///
/// let fruits = ["apple", "banana"];
/// let more = ["banana", "cherry"];
/// assert_eq!(union(&fruits, &more), Some(vec!["apple", "banana", "cherry"]));
/// ```
pub fn union<T>(first: &[T], second: &[T]) -> SetResult<T>
where
    T: Hash + Eq + Clone,
{
    first_occurrences(first.iter().chain(second))
}

/// Returns every element of `second` that occurs in `first`, in `second`'s
/// order.
///
/// Repeats in `second` are kept: only membership in `first` is deduplicated.
///
/// # Examples
///
/// ```rust
/// use effp::collection::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3, 4], &[3, 4, 5, 6]), Some(vec![3, 4]));
/// assert_eq!(intersection(&[1, 2], &[1, 1, 2]), Some(vec![1, 1, 2]));
/// assert_eq!(intersection(&[1, 2, 3], &[4, 5, 6]), None);
/// ```
pub fn intersection<T>(first: &[T], second: &[T]) -> SetResult<T>
where
    T: Hash + Eq + Clone,
{
    let members = membership(first);
    non_empty(
        second
            .iter()
            .filter(|element| members.contains(element))
            .cloned()
            .collect(),
    )
}

/// Returns every element of `first` that does not occur in `second`, in
/// `first`'s order.
///
/// Repeats in `first` are kept.
///
/// # Examples
///
/// ```rust
/// use effp::collection::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[3, 4, 5, 6]), Some(vec![1, 2]));
/// assert_eq!(difference(&[1, 2, 3], &[1, 2, 3]), None);
/// ```
pub fn difference<T>(first: &[T], second: &[T]) -> SetResult<T>
where
    T: Hash + Eq + Clone,
{
    let excluded = membership(second);
    non_empty(
        first
            .iter()
            .filter(|element| !excluded.contains(element))
            .cloned()
            .collect(),
    )
}

/// Method-style access to the set algebra functions on slices.
///
/// Implemented for `[T]`, so `Vec<T>` and arrays pick it up through deref.
///
/// # Examples
///
/// ```rust
/// use effp::collection::SetAlgebra;
///
/// let tags = vec!["rust", "fp", "rust"];
/// assert_eq!(tags.deduplicate(), Some(vec!["rust", "fp"]));
/// assert_eq!(tags.difference(&["fp"]), Some(vec!["rust", "rust"]));
/// ```
pub trait SetAlgebra<T> {
    /// See [`deduplicate`].
    fn deduplicate(&self) -> SetResult<T>;

    /// See [`union`].
    fn union(&self, other: &[T]) -> SetResult<T>;

    /// See [`intersection`].
    fn intersection(&self, other: &[T]) -> SetResult<T>;

    /// See [`difference`].
    fn difference(&self, other: &[T]) -> SetResult<T>;
}

impl<T> SetAlgebra<T> for [T]
where
    T: Hash + Eq + Clone,
{
    #[inline]
    fn deduplicate(&self) -> SetResult<T> {
        deduplicate(self)
    }

    #[inline]
    fn union(&self, other: &[T]) -> SetResult<T> {
        union(self, other)
    }

    #[inline]
    fn intersection(&self, other: &[T]) -> SetResult<T> {
        intersection(self, other)
    }

    #[inline]
    fn difference(&self, other: &[T]) -> SetResult<T> {
        difference(self, other)
    }
}
