use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NearestNeighborsError {
    /// One of the coordinate slices handed to a constructor had no elements.
    #[error("Coordinate slices must each contain at least one element")]
    EmptyInput,

    /// The `x` and `y` coordinate slices differ in length.
    #[error("Coordinate slices differ in length: x has {x_len}, y has {y_len}")]
    LengthMismatch {
        /// Length of the `x` slice
        x_len: usize,
        /// Length of the `y` slice
        y_len: usize,
    },

    /// A bounding box was requested with `min > max` on some axis.
    #[error("Invalid bounds on axis {axis}: min {min} is greater than max {max}")]
    InvalidBounds {
        /// The offending axis, 0 for x and 1 for y
        axis: usize,
        /// Requested minimum
        min: f64,
        /// Requested maximum
        max: f64,
    },

    /// A query or configuration argument was out of its valid domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, NearestNeighborsError>;
