//! # Gaussian elimination
//!
//! The destructive algorithms on the dense matrix type: forward triangularization, LU
//! decomposition with partial pivoting, Gauss-Jordan solving of linear systems, inversion and the
//! determinant. Each algorithm works on an owned copy of the matrix it was called on.
//!
//! Elimination is split into named steps (pivot search, row swap, normalization, elimination,
//! back-substitution) so each can be reasoned about separately; the composed input/output
//! behavior is what the contracts below describe.
use crate::data::linear_algebra::error::AlgebraError;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::Element;

/// Result of [`Matrix::decompose`]: a lower and upper triangular factor and the row permutation
/// under which they reconstruct the decomposed matrix.
///
/// When partial pivoting swapped rows, `L * U` equals the row-permuted original rather than the
/// original itself. The permutation is tracked explicitly so that the reconstruction
/// `L * U == P * original` holds in all cases.
#[derive(Clone, Debug, PartialEq)]
pub struct LUDecomposition<F> {
    /// Lower triangular factor with a unit diagonal, square with size the number of rows of the
    /// decomposed matrix.
    pub l: Matrix<F>,
    /// Upper triangular factor with the dimensions of the decomposed matrix.
    pub u: Matrix<F>,
    /// `row_order[i]` is the index of the original row that ended up in position `i`.
    pub row_order: Vec<usize>,
    /// Number of row swaps performed while decomposing.
    pub nr_swaps: usize,
}

impl<F: Element> LUDecomposition<F> {
    /// The permutation matrix `P` such that `L * U == P * original`.
    pub fn permutation(&self) -> Matrix<F> {
        let mut permutation = Matrix::zeros(self.row_order.len(), self.row_order.len());
        for (i, &original_row) in self.row_order.iter().enumerate() {
            permutation[(i, original_row)] = F::one();
        }

        permutation
    }

    /// Sign of the permutation: `1` for an even number of row swaps, `-1` for an odd number.
    pub fn sign(&self) -> F {
        if self.nr_swaps % 2 == 0 { F::one() } else { -F::one() }
    }
}

impl<F: Element> Matrix<F> {
    /// Forward Gaussian elimination without row swaps, producing an upper triangular matrix.
    ///
    /// # Errors
    ///
    /// `AlgebraError::Degenerate` as soon as a pivot position is exactly zero; no row swaps are
    /// attempted, use [`Matrix::decompose`] when pivoting is needed.
    pub fn upper_triangular(&self) -> Result<Self, AlgebraError> {
        let mut m = self.clone();

        for pivot in 0..self.nr_rows().min(self.nr_columns()) {
            let pivot_value = m[(pivot, pivot)];
            if pivot_value == F::zero() {
                return Err(AlgebraError::Degenerate);
            }

            for row in (pivot + 1)..self.nr_rows() {
                let factor = m[(row, pivot)] / pivot_value;
                if factor != F::zero() {
                    m.mul_add_rows(pivot, row, -factor);
                }
            }
        }

        Ok(m)
    }

    /// Forward Gaussian elimination without row swaps, normalizing each pivot row so the result
    /// is upper triangular with ones on the diagonal.
    ///
    /// # Errors
    ///
    /// `AlgebraError::Degenerate` as soon as a pivot position is exactly zero.
    pub fn upper_triangular_ones(&self) -> Result<Self, AlgebraError> {
        let mut m = self.clone();

        for pivot in 0..self.nr_rows().min(self.nr_columns()) {
            let pivot_value = m[(pivot, pivot)];
            if pivot_value == F::zero() {
                return Err(AlgebraError::Degenerate);
            }
            if pivot_value != F::one() {
                m.divide_row(pivot, pivot, pivot_value);
            }

            for row in (pivot + 1)..self.nr_rows() {
                let factor = m[(row, pivot)];
                if factor != F::zero() {
                    m.mul_add_rows(pivot, row, -factor);
                }
            }
        }

        Ok(m)
    }

    /// Doolittle LU decomposition with partial pivoting.
    ///
    /// When a pivot position is exactly zero, the rows below it are scanned for a nonzero entry
    /// in the pivot column and the two rows are swapped. Swaps are recorded in the returned
    /// permutation, so `l * u` reconstructs the row-permuted original (see
    /// [`LUDecomposition::permutation`]).
    ///
    /// Also defined for rectangular matrices with at least as many columns as rows, matching the
    /// elimination of one pivot per row.
    ///
    /// # Errors
    ///
    /// `AlgebraError::Degenerate` when a pivot column is zero at and below the pivot position.
    pub fn decompose(&self) -> Result<LUDecomposition<F>, AlgebraError> {
        let mut u = self.clone();
        let mut l = Self::identity(self.nr_rows());
        let mut row_order = (0..self.nr_rows()).collect::<Vec<_>>();
        let mut nr_swaps = 0;

        for pivot in 0..self.nr_rows().min(self.nr_columns()) {
            if u[(pivot, pivot)] == F::zero() {
                match u.pivot_row_at_or_below(pivot + 1, pivot) {
                    Some(swap_row) => {
                        u.swap_rows(pivot, swap_row);
                        // Only the multipliers already recorded move along with the row; the
                        // unit diagonal stays in place.
                        for column in 0..pivot {
                            let high = l[(pivot, column)];
                            let low = l[(swap_row, column)];
                            l[(pivot, column)] = low;
                            l[(swap_row, column)] = high;
                        }
                        row_order.swap(pivot, swap_row);
                        nr_swaps += 1;
                    },
                    None => return Err(AlgebraError::Degenerate),
                }
            }

            for row in (pivot + 1)..self.nr_rows() {
                if u[(row, pivot)] != F::zero() {
                    let multiplier = u[(row, pivot)] / u[(pivot, pivot)];
                    l[(row, pivot)] = multiplier;
                    u.mul_add_rows(pivot, row, -multiplier);
                }
            }
        }

        Ok(LUDecomposition { l, u, row_order, nr_swaps, })
    }

    /// Using this matrix as a set of constraints, solve the system `self * x == equality`. Each
    /// column of `equality` is one right-hand side; all are solved simultaneously.
    ///
    /// Gauss-Jordan elimination with partial pivoting: the augmented matrix `[self | equality]`
    /// is reduced to reduced row-echelon form and the right-hand-side columns of the result are
    /// the solution.
    ///
    /// # Errors
    ///
    /// `AlgebraError::DimensionMismatch` unless `equality` has as many rows as this matrix,
    /// `AlgebraError::Degenerate` when a pivot column has no nonzero value at or below the pivot
    /// row.
    pub fn solve(&self, equality: &Self) -> Result<Self, AlgebraError> {
        if equality.nr_rows() != self.nr_rows() {
            return Err(AlgebraError::DimensionMismatch {
                operation: "solve",
                left: (self.nr_rows(), self.nr_columns()),
                right: (equality.nr_rows(), equality.nr_columns()),
            });
        }

        let mut work = self.hcat(equality)?;
        let nr_pivots = self.nr_rows().min(self.nr_columns());

        // Forward pass: pivot normalization and elimination below.
        for pivot in 0..nr_pivots {
            let row = match work.pivot_row_at_or_below(pivot, pivot) {
                Some(row) => row,
                None => return Err(AlgebraError::Degenerate),
            };
            work.swap_rows(pivot, row);

            let pivot_value = work[(pivot, pivot)];
            if pivot_value != F::one() {
                work.divide_row(pivot, pivot, pivot_value);
            }

            for row in (pivot + 1)..self.nr_rows() {
                let factor = work[(row, pivot)];
                if factor != F::zero() {
                    work.mul_add_rows(pivot, row, -factor);
                }
            }
        }

        // Backward pass: eliminate above each pivot.
        for pivot in (0..nr_pivots).rev() {
            for row in (0..pivot).rev() {
                let factor = work[(row, pivot)];
                if factor != F::zero() {
                    work.mul_add_rows(pivot, row, -factor);
                }
            }
        }

        let solution_columns = (self.nr_columns()..work.nr_columns()).collect::<Vec<_>>();
        work.select_columns(&solution_columns)
    }

    /// First row at or below `start_row` with a nonzero value in `column`.
    fn pivot_row_at_or_below(&self, start_row: usize, column: usize) -> Option<usize> {
        (start_row..self.nr_rows()).find(|&row| self[(row, column)] != F::zero())
    }

    /// Compute the inverse of this matrix by solving `self * x == identity`.
    ///
    /// # Errors
    ///
    /// `AlgebraError::NotSquare` unless the matrix is square, `AlgebraError::Singular` when it
    /// does not reduce.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                nr_rows: self.nr_rows(),
                nr_columns: self.nr_columns(),
            });
        }

        self.solve(&Self::identity(self.nr_rows())).map_err(|error| match error {
            AlgebraError::Degenerate => AlgebraError::Singular,
            other => other,
        })
    }

    /// Compute the determinant of this matrix through its LU decomposition: the product of the
    /// diagonals of both factors, negated for an odd number of row swaps.
    ///
    /// A matrix that fails to decompose does not have full rank, so its determinant is reported
    /// as exactly zero rather than as an error.
    ///
    /// # Errors
    ///
    /// `AlgebraError::NotSquare` unless the matrix is square.
    pub fn determinant(&self) -> Result<F, AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                nr_rows: self.nr_rows(),
                nr_columns: self.nr_columns(),
            });
        }

        match self.decompose() {
            Ok(decomposition) => {
                let mut determinant = decomposition.sign();
                for i in 0..self.nr_rows() {
                    determinant *= decomposition.l[(i, i)];
                    determinant *= decomposition.u[(i, i)];
                }
                Ok(determinant)
            },
            Err(AlgebraError::Degenerate) => Ok(F::zero()),
            Err(other) => Err(other),
        }
    }

    /// Whether a linear system with this coefficient matrix can be solved, probed against a zero
    /// right-hand side.
    pub fn can_solve(&self) -> bool {
        self.solve(&Self::zeros(self.nr_rows(), 1)).is_ok()
    }
}
