//! Error handling for the algolab library
//!
//! Every fallible operation in the crate returns [`Result`]. Malformed input
//! (ragged grids, unbalanced expressions, zero-sized tables) is rejected with
//! a descriptive error instead of being silently repaired.

use thiserror::Error;

/// Main error type for the algolab library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgolabError {
    /// Malformed or inconsistent input data
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message describing the issue
        message: String,
    },

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Square-only grid operation applied to a non-square grid
    #[error("Non-square grid: {rows}x{cols}")]
    NonSquareGrid {
        /// Row count of the offending grid
        rows: usize,
        /// Column count of the offending grid
        cols: usize,
    },

    /// Unbalanced or malformed arithmetic expression
    #[error("Invalid expression: {message}")]
    InvalidExpression {
        /// Error message describing the issue
        message: String,
    },

    /// Integer division by zero during expression evaluation
    #[error("Division by zero")]
    DivisionByZero,
}

impl AlgolabError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a non-square grid error
    pub fn non_square(rows: usize, cols: usize) -> Self {
        Self::NonSquareGrid { rows, cols }
    }

    /// Create an invalid expression error
    pub fn invalid_expression<S: Into<String>>(message: S) -> Self {
        Self::InvalidExpression { message: message.into() }
    }

    /// Get the error category for reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "input",
            Self::OutOfBounds { .. } => "bounds",
            Self::NonSquareGrid { .. } => "grid",
            Self::InvalidExpression { .. } => "expression",
            Self::DivisionByZero => "arithmetic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AlgolabError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(AlgolabError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}
