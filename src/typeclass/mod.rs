//! Type class traits for functional programming abstractions.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over container values
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Generic Associated Types (GAT) are used to emulate them, which lets
//! [`Functor`] name "the same container holding `B`". The crate's only
//! container is [`Maybe`](crate::control::Maybe).
//!
//! # Examples
//!
//! ```rust
//! use effp::control::Maybe;
//! use effp::typeclass::Functor;
//!
//! let x = Maybe::just(5);
//! assert_eq!(x.fmap(|n| n + 1), Maybe::just(6));
//!
//! let y: Maybe<i32> = Maybe::nothing();
//! assert_eq!(y.fmap(|n| n + 1), Maybe::nothing());
//! ```

mod functor;
mod higher;

pub use functor::Functor;
pub use higher::TypeConstructor;
