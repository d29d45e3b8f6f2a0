//! Element-wise transform guarded against nil elements.

use super::error::CollectionError;
use super::guard::{Nullable, ensure_not_nil};

/// Applies `function` to every element of `input`, preserving order and length.
///
/// Every element is checked with the nil guard before `function` runs, so a
/// call either transforms the whole input or produces nothing. `function` is
/// never invoked on a call that fails.
///
/// # Errors
///
/// Returns [`CollectionError::NilElement`] with the index of the first nil
/// element.
///
/// # Examples
///
/// ```rust
/// use effp::collection::map_elements;
///
/// let cents = vec![Some(100), Some(4995)];
/// let doubled = map_elements(&cents, |price| price.map(|p| p * 2));
/// assert_eq!(doubled, Ok(vec![Some(200), Some(9990)]));
///
/// let with_gap = vec![Some(100), None];
/// assert!(map_elements(&with_gap, |price| price.map(|p| p * 2)).is_err());
/// ```
pub fn map_elements<A, B, F>(input: &[A], function: F) -> Result<Vec<B>, CollectionError>
where
    A: Nullable,
    F: FnMut(&A) -> B,
{
    input
        .iter()
        .enumerate()
        .try_for_each(|(index, element)| ensure_not_nil(element, index))?;
    Ok(input.iter().map(function).collect())
}
