//! # Standard form problem
//!
//! The polyhedron `A x <= b, x >= 0` together with an objective `c`, validated at construction.
//! An instance of this context is passed explicitly to every enumeration entry point; there is no
//! process-wide state.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::Element;

/// A linear program in standard inequality form.
///
/// The constraints are `A x <= b` over nonnegative variables `x`, with `A` of dimension `m x n`.
/// The objective `c` is read in maximization style: a basis is optimal when no nonbasic variable
/// has a strictly positive reduced cost. To minimize an objective, negate it.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    constraints: Matrix<F>,
    rhs: Matrix<F>,
    objective: Matrix<F>,
}

impl<F: Element> StandardForm<F> {
    /// Create a new `StandardForm` instance.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Coefficient matrix `A` of dimension `m x n`.
    /// * `rhs`: Column vector `b` of dimension `m x 1`.
    /// * `objective`: Column vector `c` of dimension `n x 1`.
    ///
    /// # Errors
    ///
    /// `ProblemError` when `rhs` or `objective` does not have the shape the constraint matrix
    /// implies.
    pub fn new(
        constraints: Matrix<F>,
        rhs: Matrix<F>,
        objective: Matrix<F>,
    ) -> Result<Self, ProblemError> {
        if rhs.nr_rows() != constraints.nr_rows() || rhs.nr_columns() != 1 {
            return Err(ProblemError::RightHandSideShape {
                expected: (constraints.nr_rows(), 1),
                actual: (rhs.nr_rows(), rhs.nr_columns()),
            });
        }
        if objective.nr_rows() != constraints.nr_columns() || objective.nr_columns() != 1 {
            return Err(ProblemError::ObjectiveShape {
                expected: (constraints.nr_columns(), 1),
                actual: (objective.nr_rows(), objective.nr_columns()),
            });
        }

        Ok(Self { constraints, rhs, objective, })
    }

    /// The coefficient matrix `A`.
    pub fn constraints(&self) -> &Matrix<F> {
        &self.constraints
    }

    /// The constraint bounds `b` as an `m x 1` column.
    pub fn rhs(&self) -> &Matrix<F> {
        &self.rhs
    }

    /// The objective function `c` as an `n x 1` column.
    pub fn objective(&self) -> &Matrix<F> {
        &self.objective
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of original (non slack) variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.constraints.nr_columns()
    }
}

/// A shape inconsistency between the parts of a problem description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// The right-hand side is not a column with one value per constraint.
    RightHandSideShape {
        /// Shape implied by the constraint matrix.
        expected: (usize, usize),
        /// Shape that was provided.
        actual: (usize, usize),
    },
    /// The objective is not a column with one value per variable.
    ObjectiveShape {
        /// Shape implied by the constraint matrix.
        expected: (usize, usize),
        /// Shape that was provided.
        actual: (usize, usize),
    },
}

impl Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemError::RightHandSideShape { expected, actual } => {
                write!(
                    f,
                    "right-hand side should be a ({}, {}) column, got ({}, {})",
                    expected.0, expected.1, actual.0, actual.1,
                )
            },
            ProblemError::ObjectiveShape { expected, actual } => {
                write!(
                    f,
                    "objective should be a ({}, {}) column, got ({}, {})",
                    expected.0, expected.1, actual.0, actual.1,
                )
            },
        }
    }
}

impl Error for ProblemError {
}
