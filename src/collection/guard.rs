//! Nil guard consulted by the element-wise transform.
//!
//! Rust references are never null, so "nil" is a property of the element type:
//! `None`, `Nothing` and null raw pointers are nil, plain values never are.
//! Custom element types opt in by implementing [`Nullable`].
//!
//! # Examples
//!
//! ```rust
//! use effp::collection::{Nullable, ensure_not_nil};
//!
//! struct Config {
//!     endpoint: Option<String>,
//! }
//!
//! impl Nullable for Config {
//!     fn is_nil(&self) -> bool {
//!         self.endpoint.is_none()
//!     }
//! }
//!
//! let empty = Config { endpoint: None };
//! assert!(ensure_not_nil(&empty, 0).is_err());
//! ```

use super::error::NilElementError;

/// Types whose values may represent a missing reference.
pub trait Nullable {
    /// Returns `true` if this value is nil.
    fn is_nil(&self) -> bool;
}

/// Rejects a nil element found at `index`.
///
/// # Errors
///
/// Returns [`NilElementError`] carrying `index` when `element` is nil.
#[inline]
pub fn ensure_not_nil<A: Nullable + ?Sized>(
    element: &A,
    index: usize,
) -> Result<(), NilElementError> {
    if element.is_nil() {
        Err(NilElementError { index })
    } else {
        Ok(())
    }
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "control")]
impl<T> Nullable for crate::control::Maybe<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_nothing()
    }
}

// Pointers are compared against null, never dereferenced.
impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

macro_rules! impl_non_nullable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nullable for $ty {
                #[inline]
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_non_nullable!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl<T> Nullable for Vec<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for Box<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        false
    }
}
