#![cfg(feature = "control")]
//! Property-based tests for `Maybe` Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! Both the free `fmap` and the `Functor` trait method are checked.

use effp::control::{Maybe, fmap};
use effp::typeclass::Functor;
use proptest::prelude::*;

fn maybe_of<T: std::fmt::Debug + Clone>(
    strategy: impl Strategy<Value = T>,
) -> impl Strategy<Value = Maybe<T>> {
    prop::option::of(strategy).prop_map(Maybe::from)
}

// =============================================================================
// Identity Law
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_of(any::<i32>())) {
        prop_assert_eq!(fmap(value, |x| x), value);
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_maybe_string_identity_law(value in maybe_of(any::<String>())) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }
}

// =============================================================================
// Composition Law
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_composition_law(value in maybe_of(any::<i32>())) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = fmap(fmap(value, function1), function2);
        let right = fmap(value, |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_string_composition_law(value in maybe_of(any::<String>())) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Variant Preservation
// =============================================================================

proptest! {
    /// fmap keeps the variant: Nothing stays Nothing, Just stays Just.
    #[test]
    fn prop_fmap_preserves_variant(value in maybe_of(any::<i64>())) {
        let mapped = fmap(value, |n| n.to_string());
        prop_assert_eq!(mapped.is_just(), value.is_just());
    }

    /// get and get_or_else agree whenever the fallback is the default.
    #[test]
    fn prop_get_matches_get_or_else_default(value in maybe_of(any::<i32>())) {
        prop_assert_eq!(value.get(), value.get_or_else(0));
    }

    /// Converting through Option is lossless.
    #[test]
    fn prop_option_roundtrip(value in maybe_of(any::<u16>())) {
        let option: Option<u16> = value.into();
        prop_assert_eq!(Maybe::from(option), value);
    }
}
