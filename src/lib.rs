//! # effp
//!
//! Small functional utilities for Rust: order-preserving set algebra over
//! slices, an optional-value type with a never-failing accessor, and an
//! element-wise transform that rejects nil elements.
//!
//! ## Overview
//!
//! - **Type Classes**: [`TypeConstructor`](typeclass::TypeConstructor) and
//!   [`Functor`](typeclass::Functor)
//! - **Control Structures**: [`Maybe`](control::Maybe) and
//!   [`fmap`](control::fmap)
//! - **Collections**: `deduplicate`, `union`, `intersection`, `difference`
//!   and `map_elements`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, etc.)
//! - `control`: The `Maybe` type
//! - `collection`: Set algebra and the guarded element-wise transform
//! - `serde`: Serialize/Deserialize for `Maybe`
//! - `fxhash` / `ahash`: Faster hashers for set algebra membership tests
//! - `full`: Enable all features except the alternative hashers
//!
//! ## Example
//!
//! ```rust
//! use effp::prelude::*;
//!
//! let first = [1, 2, 3, 4];
//! let second = [3, 4, 5, 6];
//! assert_eq!(intersection(&first, &second), Some(vec![3, 4]));
//!
//! let lookup: Maybe<i32> = Maybe::from_nullable(first.iter().find(|n| **n > 3));
//! assert_eq!(lookup.fmap(|n| n * 2).get_or_else(-1), 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use effp::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collection")]
pub mod collection;
