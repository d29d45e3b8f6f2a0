//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` as a type constructor directly.
//! [`TypeConstructor`] works around this with a GAT so that
//! [`Functor`](super::Functor) can name "the same container holding `B`".
//!
//! # Example
//!
//! ```rust
//! use effp::control::Maybe;
//! use effp::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let label: Maybe<String> = empty_like(Maybe::just(3));
//! assert!(label.is_nothing());
//! ```

/// A type constructor applied to some inner type.
///
/// # Associated Types
///
/// - `Inner`: the type parameter the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
