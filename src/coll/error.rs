//! Error types for collection operations.
//!
//! This module provides the error types reported when a collection
//! operation cannot produce a result, such as materializing pairs whose
//! keys fit no single shape or addressing a nested structure with an
//! unusable path.

/// Represents a pair stream or operand whose shape does not fit the
/// requested operation.
///
/// Reported when materialization meets keys that are neither uniformly
/// positional nor uniformly named, or when a keyed update targets a
/// collection of the other kind.
///
/// # Examples
///
/// ```rust
/// use xduce::coll::UnsupportedShapeError;
///
/// let error = UnsupportedShapeError {
///     operation: "materialize",
///     expected: "uniformly indexed or uniformly named keys",
///     actual: "a mix of indexed and named keys",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "materialize: uniformly indexed or uniformly named keys required, found a mix of indexed and named keys"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedShapeError {
    /// The name of the operation that was attempted.
    pub operation: &'static str,
    /// The shape the operation requires.
    pub expected: &'static str,
    /// The shape that was actually found.
    pub actual: &'static str,
}

impl std::fmt::Display for UnsupportedShapeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: {} required, found {}",
            self.operation, self.expected, self.actual
        )
    }
}

impl std::error::Error for UnsupportedShapeError {}

/// Represents an argument that rules an operation out before any element
/// is touched.
///
/// # Examples
///
/// ```rust
/// use xduce::coll::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "split_every",
///     message: "chunk size must be positive",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "split_every: chunk size must be positive"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the operation that was attempted.
    pub operation: &'static str,
    /// Why the argument was rejected.
    pub message: &'static str,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.operation, self.message)
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Represents a path that cannot be walked through a nested structure.
///
/// The `depth` field is the zero-based position of the path segment at
/// which traversal stopped.
///
/// # Examples
///
/// ```rust
/// use xduce::coll::InvalidPathError;
///
/// let error = InvalidPathError {
///     operation: "assoc_path",
///     depth: 1,
///     reason: "index is past the end of the sequence",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "assoc_path: path segment 1: index is past the end of the sequence"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPathError {
    /// The name of the operation that was attempted.
    pub operation: &'static str,
    /// The zero-based position of the failing path segment.
    pub depth: usize,
    /// Why traversal stopped at that segment.
    pub reason: &'static str,
}

impl std::fmt::Display for InvalidPathError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: path segment {}: {}",
            self.operation, self.depth, self.reason
        )
    }
}

impl std::error::Error for InvalidPathError {}

/// Represents errors that can occur when operating on collections.
///
/// This enum provides a unified error type for everything the collection
/// layer can reject at runtime.
///
/// # Examples
///
/// ```rust
/// use xduce::coll::{CollectionError, InvalidArgumentError};
///
/// let error = CollectionError::InvalidArgument(InvalidArgumentError {
///     operation: "merge",
///     message: "operands must both be maps",
/// });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The pair stream or operand fits no single collection shape.
    UnsupportedShape(UnsupportedShapeError),
    /// An argument ruled the operation out up front.
    InvalidArgument(InvalidArgumentError),
    /// A nested path could not be walked.
    InvalidPath(InvalidPathError),
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedShape(error) => write!(formatter, "{error}"),
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::InvalidPath(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {}

impl From<UnsupportedShapeError> for CollectionError {
    fn from(error: UnsupportedShapeError) -> Self {
        Self::UnsupportedShape(error)
    }
}

impl From<InvalidArgumentError> for CollectionError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<InvalidPathError> for CollectionError {
    fn from(error: InvalidPathError) -> Self {
        Self::InvalidPath(error)
    }
}
