//! # Error reporting for matrix operations
//!
//! Expected failure modes of the matrix engine are values, not panics: callers such as the
//! dictionary evaluator inspect them to decide whether a candidate basis should simply be skipped.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Any way in which a matrix operation can fail.
///
/// Operations fail fast: no partial result is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Two operands do not have the dimensions the algebraic rule of the operation requires.
    DimensionMismatch {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Dimensions `(rows, columns)` of the left operand.
        left: (usize, usize),
        /// Dimensions `(rows, columns)` of the right operand.
        right: (usize, usize),
    },
    /// An index lies beyond the declared size of the matrix.
    OutOfRange {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        column: usize,
        /// Number of rows in the matrix.
        nr_rows: usize,
        /// Number of columns in the matrix.
        nr_columns: usize,
    },
    /// A pivot position is exactly zero and no row swap can resolve it; elimination cannot
    /// continue.
    Degenerate,
    /// An inverse was requested of a matrix that does not decompose.
    Singular,
    /// The operation is only defined for square matrices.
    NotSquare {
        /// Number of rows in the matrix.
        nr_rows: usize,
        /// Number of columns in the matrix.
        nr_columns: usize,
    },
}

impl Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlgebraError::DimensionMismatch { operation, left, right } => {
                write!(
                    f,
                    "matrices cannot be combined with `{}`: ({}, {}) versus ({}, {})",
                    operation, left.0, left.1, right.0, right.1,
                )
            },
            AlgebraError::OutOfRange { row, column, nr_rows, nr_columns } => {
                write!(
                    f,
                    "index ({}, {}) is out of range for a matrix of size ({}, {})",
                    row, column, nr_rows, nr_columns,
                )
            },
            AlgebraError::Degenerate => {
                write!(f, "matrix state is degenerate, elimination cannot continue")
            },
            AlgebraError::Singular => write!(f, "unable to invert a singular matrix"),
            AlgebraError::NotSquare { nr_rows, nr_columns } => {
                write!(
                    f,
                    "operation requires a square matrix, got size ({}, {})",
                    nr_rows, nr_columns,
                )
            },
        }
    }
}

impl Error for AlgebraError {
}
