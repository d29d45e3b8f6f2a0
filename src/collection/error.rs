//! Error types for the collection utilities.
//!
//! Set algebra is total and never fails. The only failure comes from the
//! element-wise transform, whose nil guard rejects a whole input sequence as
//! soon as one element is nil.

/// Represents a nil element found by the nil guard.
///
/// # Examples
///
/// ```rust
/// use effp::collection::NilElementError;
///
/// let error = NilElementError { index: 2 };
/// assert_eq!(format!("{error}"), "element at index 2 is nil");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NilElementError {
    /// The position of the offending element in the input sequence.
    pub index: usize,
}

impl std::fmt::Display for NilElementError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "element at index {} is nil", self.index)
    }
}

impl std::error::Error for NilElementError {}

/// Represents errors that can occur in the collection utilities.
///
/// # Examples
///
/// ```rust
/// use effp::collection::{CollectionError, NilElementError, map_elements};
///
/// let input = vec![Some(1), None];
/// let result = map_elements(&input, |element| element.map(|n| n + 1));
/// assert_eq!(
///     result,
///     Err(CollectionError::NilElement(NilElementError { index: 1 }))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// An input element was nil, so the call produced no output.
    NilElement(NilElementError),
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilElement(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NilElement(error) => Some(error),
        }
    }
}

impl From<NilElementError> for CollectionError {
    fn from(error: NilElementError) -> Self {
        Self::NilElement(error)
    }
}
