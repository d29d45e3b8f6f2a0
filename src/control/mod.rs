//! Control structures for functional programming.
//!
//! - [`Maybe`]: A value that is either present (`Just`) or absent (`Nothing`)
//! - [`fmap`]: Functor-style transform over a [`Maybe`]
//!
//! # Examples
//!
//! ```rust
//! use effp::control::{Maybe, fmap};
//!
//! fn parse_number(input: &str) -> Maybe<i32> {
//!     input.parse::<i32>().ok().into()
//! }
//!
//! let doubled = fmap(parse_number("10"), |n| n * 2);
//! assert_eq!(doubled.get_or_else(-1), 20);
//!
//! let invalid = fmap(parse_number("invalid"), |n| n * 2);
//! assert_eq!(invalid.get_or_else(-1), -1);
//! ```

mod maybe;

pub use maybe::{Maybe, fmap};
