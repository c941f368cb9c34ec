//! Error type shared by every matrix operation.

/// Errors reported by matrix construction and multiplication.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// A matrix buffer could not be obtained.
    #[error("failed to allocate a matrix buffer of {elements} elements")]
    AllocationFailure {
        /// Number of `f64` elements requested.
        elements: usize,
    },

    /// Operands do not share the same dimension.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// Matrix dimension must be at least 1.
    #[error("invalid dimension: {0} (must be >= 1)")]
    InvalidDimension(usize),

    /// Supplied data does not describe an n x n matrix.
    #[error("invalid matrix data: expected {expected} values, got {actual}")]
    InvalidData {
        /// Number of values required.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Products from different multipliers disagree.
    #[error("result mismatch between multipliers")]
    Mismatch,

    /// No multiplier is registered under this name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
