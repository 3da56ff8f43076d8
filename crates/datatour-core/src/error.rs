use thiserror::Error;

/// All errors returned by `datatour-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A shape specification is invalid.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// An axis index is out of bounds for the tensor's rank.
    #[error("axis {axis} out of bounds for tensor with {ndim} dimensions")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    /// A multi-dimensional index is out of bounds.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    /// A reduction was asked of a tensor with no elements.
    #[error("{op} of an empty tensor")]
    EmptyInput { op: &'static str },

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

/// Convenience alias used throughout `datatour-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
