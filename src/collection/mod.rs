//! Utilities over homogeneous sequences.
//!
//! - [`deduplicate`], [`union`], [`intersection`], [`difference`]: order-preserving
//!   set algebra returning [`SetResult`]
//! - [`SetAlgebra`]: the same operations as methods on slices
//! - [`map_elements`]: element-wise transform that rejects nil elements
//! - [`Nullable`], [`ensure_not_nil`]: the nil guard
//!
//! # Examples
//!
//! ```rust
//! use effp::collection::{deduplicate, union};
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let points = [
//!     Point { x: 1, y: 2 },
//!     Point { x: 3, y: 4 },
//!     Point { x: 1, y: 2 },
//! ];
//! assert_eq!(
//!     deduplicate(&points),
//!     Some(vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }])
//! );
//!
//! let words = ["apple", "banana"];
//! assert_eq!(union(&words, &["cherry"]), Some(vec!["apple", "banana", "cherry"]));
//! ```

mod error;
mod guard;
mod map;
mod set_algebra;

pub use error::{CollectionError, NilElementError};
pub use guard::{Nullable, ensure_not_nil};
pub use map::map_elements;
pub use set_algebra::{SetAlgebra, SetResult, deduplicate, difference, intersection, union};
