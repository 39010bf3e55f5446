use thiserror::Error;

/// Error returned by the checked (`try_*`) operations when their input is degenerate.
///
/// The unchecked counterparts of these operations never fail. They silently produce NaN or
/// infinite values instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateInput {
    /// A vector of zero length cannot be normalized.
    #[error("cannot normalize a vector of zero length")]
    ZeroLength,
    /// A pivot fell below the tolerance during LU decomposition.
    #[error("matrix is singular: no usable pivot in column {column}")]
    Singular { column: usize },
    /// No nonzero orthogonal vector exists for the input (for example, the zero vector).
    #[error("no nonzero orthogonal vector could be constructed")]
    NoOrthogonal,
}
