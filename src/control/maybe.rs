//! Maybe type - a value that is either present or deliberately absent.
//!
//! This module provides [`Maybe<A>`], a two-variant container with exactly one
//! active state:
//!
//! - `Just(A)`: holds exactly one value
//! - `Nothing`: holds no value
//!
//! Extraction never fails. [`Maybe::get`] falls back to the type's default and
//! [`Maybe::get_or_else`] to a caller-supplied value, so absence is cheap to
//! handle and can never panic.
//!
//! # Examples
//!
//! ```rust
//! use effp::control::{Maybe, fmap};
//!
//! let name = String::from("John");
//! let present = Maybe::from_nullable(Some(&name));
//! assert_eq!(present.get_or_else("Unknown".to_string()), "John");
//!
//! let missing: Option<&String> = None;
//! let absent = Maybe::from_nullable(missing);
//! assert_eq!(absent.get_or_else("Unknown".to_string()), "Unknown");
//!
//! let doubled = fmap(Maybe::just(21), |n| n * 2);
//! assert_eq!(doubled.get_or_else(-1), 42);
//! ```

use std::fmt;

use crate::typeclass::{Functor, TypeConstructor};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// `Maybe` is immutable: a "transition" between variants only happens by
/// building a new value, for instance through [`fmap`].
///
/// # Type Parameters
///
/// * `A` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use effp::control::Maybe;
///
/// let present = Maybe::just(5);
/// let absent: Maybe<i32> = Maybe::nothing();
///
/// assert_eq!(present.get_or_else(99), 5);
/// assert_eq!(absent.get_or_else(99), 99);
/// assert_eq!(absent.get(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// An absent value.
    Nothing,
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Bridges a possibly-missing reference into a `Maybe`.
    ///
    /// `None` becomes `Nothing` without touching anything; `Some(reference)`
    /// becomes `Just` holding a clone of the referenced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effp::control::Maybe;
    /// use std::collections::HashMap;
    ///
    /// let ages = HashMap::from([("alice", 30), ("bob", 25)]);
    ///
    /// assert_eq!(Maybe::from_nullable(ages.get("alice")), Maybe::just(30));
    /// assert_eq!(Maybe::from_nullable(ages.get("carol")), Maybe::nothing());
    /// ```
    #[inline]
    pub fn from_nullable(reference: Option<&A>) -> Self
    where
        A: Clone,
    {
        match reference {
            Some(value) => Self::Just(value.clone()),
            None => Self::Nothing,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the held value, or `A::default()` when absent.
    ///
    /// This never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effp::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(7).get(), 7);
    /// assert_eq!(Maybe::<i32>::nothing().get(), 0);
    /// assert_eq!(Maybe::<String>::nothing().get(), String::new());
    /// ```
    #[inline]
    pub fn get(self) -> A
    where
        A: Default,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => A::default(),
        }
    }

    /// Returns the held value, or `fallback` when absent.
    ///
    /// The fallback is ignored for `Just`.
    #[inline]
    pub fn get_or_else(self, fallback: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback,
        }
    }

    /// Returns the held value, or the result of `fallback` when absent.
    ///
    /// `fallback` is only invoked for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effp::control::Maybe;
    ///
    /// let absent: Maybe<Vec<i32>> = Maybe::nothing();
    /// assert_eq!(absent.get_or_else_with(|| vec![0]), vec![0]);
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    // =========================================================================
    // Borrowing and Conversion
    // =========================================================================

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns an iterator over the held value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.as_ref().into_option().into_iter()
    }
}

/// Applies `function` inside `source`, keeping its variant.
///
/// `Just(v)` becomes `Just(function(v))`. `Nothing` stays `Nothing` and
/// `function` is not invoked, so it may assume a valid input.
///
/// # Examples
///
/// ```rust
/// use effp::control::{Maybe, fmap};
///
/// let parsed: Maybe<i32> = "30".parse::<i32>().ok().into();
/// assert_eq!(fmap(parsed, |age| age * 2), Maybe::just(60));
///
/// let invalid: Maybe<i32> = "invalid".parse::<i32>().ok().into();
/// assert_eq!(fmap(invalid, |age| age * 2).get_or_else(-1), -1);
/// ```
#[inline]
pub fn fmap<A, B, F>(source: Maybe<A>, function: F) -> Maybe<B>
where
    F: FnOnce(A) -> B,
{
    match source {
        Maybe::Just(value) => Maybe::Just(function(value)),
        Maybe::Nothing => Maybe::Nothing,
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    /// `Some(a)` becomes `Just(a)`, and `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        fmap(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        fmap(self.as_ref(), function)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Maybe<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Just(value) => serializer.serialize_some(value),
            Self::Nothing => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<A> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn just_is_just() {
        let value = Maybe::just(42);
        assert!(value.is_just());
        assert!(!value.is_nothing());
    }

    #[rstest]
    fn nothing_is_nothing() {
        let value: Maybe<i32> = Maybe::nothing();
        assert!(value.is_nothing());
        assert!(!value.is_just());
    }

    #[rstest]
    #[case(Maybe::just(5), 5)]
    #[case(Maybe::nothing(), 0)]
    fn get_falls_back_to_default(#[case] input: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(input.get(), expected);
    }

    #[rstest]
    #[case(Maybe::just(5), 5)]
    #[case(Maybe::nothing(), 99)]
    fn get_or_else_uses_fallback_only_when_absent(
        #[case] input: Maybe<i32>,
        #[case] expected: i32,
    ) {
        assert_eq!(input.get_or_else(99), expected);
    }

    #[rstest]
    fn get_or_else_with_skips_fallback_for_just() {
        let calls = Cell::new(0);
        let value = Maybe::just(1).get_or_else_with(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn from_nullable_none_is_nothing() {
        let reference: Option<&String> = None;
        assert_eq!(Maybe::from_nullable(reference), Maybe::Nothing);
    }

    #[rstest]
    fn from_nullable_some_clones_value() {
        let name = String::from("John");
        assert_eq!(
            Maybe::from_nullable(Some(&name)),
            Maybe::just("John".to_string())
        );
        assert_eq!(name, "John");
    }

    #[rstest]
    fn fmap_skips_function_for_nothing() {
        let calls = Cell::new(0);
        let result: Maybe<i32> = fmap(Maybe::<i32>::nothing(), |n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn fmap_changes_inner_type() {
        let result: Maybe<String> = fmap(Maybe::just(5), |n: i32| n.to_string());
        assert_eq!(result, Maybe::just("5".to_string()));
    }

    #[rstest]
    fn functor_fmap_ref_keeps_source() {
        let source = Maybe::just("hello".to_string());
        assert_eq!(source.fmap_ref(String::len), Maybe::just(5));
        assert_eq!(source, Maybe::just("hello".to_string()));
    }

    #[rstest]
    #[case(Maybe::just(3), "Just(3)")]
    #[case(Maybe::nothing(), "Nothing")]
    fn display_names_variant(#[case] input: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[rstest]
    fn default_is_nothing() {
        assert_eq!(Maybe::<String>::default(), Maybe::Nothing);
    }

    #[rstest]
    fn option_conversion_roundtrip() {
        assert_eq!(Maybe::from(Some(1)), Maybe::just(1));
        assert_eq!(Option::from(Maybe::just(1)), Some(1));
        assert_eq!(Option::<i32>::from(Maybe::nothing()), None);
    }

    #[rstest]
    fn iterates_at_most_once() {
        assert_eq!(Maybe::just(4).into_iter().collect::<Vec<_>>(), vec![4]);
        assert_eq!(Maybe::<i32>::nothing().iter().count(), 0);
    }
}
