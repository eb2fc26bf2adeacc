//! # Dense matrix
//!
//! An arbitrarily sized dense matrix storing its values in row-major order. All operations leave
//! the receiver untouched: destructive algorithms first `Clone` into an owned working copy, so a
//! caller's matrix is never aliased or mutated.
use std::ops::{Index, IndexMut};

use crate::data::linear_algebra::error::AlgebraError;
use crate::data::linear_algebra::traits::Element;

/// Uses a row-major `Vec<F>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Element> Matrix<F> {
    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert_ne!(nr_rows, 0);
        debug_assert_ne!(nr_columns, 0);

        Self {
            data: vec![F::zero(); nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a matrix of ones of dimension `nr_rows` x `nr_columns`.
    pub fn ones(nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert_ne!(nr_rows, 0);
        debug_assert_ne!(nr_columns, 0);

        Self {
            data: vec![F::one(); nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        debug_assert_ne!(len, 0);

        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix[(i, i)] = F::one();
        }

        matrix
    }

    /// Create a `Matrix` from the provided rows of data.
    ///
    /// # Arguments
    ///
    /// * `data`: Nonempty collection of equally sized, nonempty rows.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let nr_rows = data.len();
        debug_assert_ne!(nr_rows, 0);
        let nr_columns = data[0].len();
        debug_assert_ne!(nr_columns, 0);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns), "rows cannot be jagged");

        Self {
            data: data.into_iter().flatten().collect(),
            nr_rows,
            nr_columns,
        }
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Whether this matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nr_rows == self.nr_columns
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `AlgebraError::OutOfRange` when either index lies beyond the declared size.
    pub fn get_value(&self, row: usize, column: usize) -> Result<F, AlgebraError> {
        self.check_range(row, column)?;
        Ok(self[(row, column)])
    }

    /// Set the value at coordinate (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `AlgebraError::OutOfRange` when either index lies beyond the declared size.
    pub fn set_value(&mut self, row: usize, column: usize, value: F) -> Result<(), AlgebraError> {
        self.check_range(row, column)?;
        self[(row, column)] = value;
        Ok(())
    }

    fn check_range(&self, row: usize, column: usize) -> Result<(), AlgebraError> {
        if row >= self.nr_rows || column >= self.nr_columns {
            Err(AlgebraError::OutOfRange {
                row,
                column,
                nr_rows: self.nr_rows,
                nr_columns: self.nr_columns,
            })
        } else {
            Ok(())
        }
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        (0..self.nr_rows).map(|i| self[(i, j)]).collect()
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[(i * self.nr_columns)..((i + 1) * self.nr_columns)]
    }

    /// Add another matrix to this one, elementwise.
    ///
    /// # Errors
    ///
    /// `AlgebraError::DimensionMismatch` unless both operands have the same size.
    pub fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.elementwise("add", other, |a, b| a + b)
    }

    /// Subtract another matrix from this one, elementwise.
    ///
    /// # Errors
    ///
    /// `AlgebraError::DimensionMismatch` unless both operands have the same size.
    pub fn subtract(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.elementwise("subtract", other, |a, b| a - b)
    }

    fn elementwise(
        &self,
        operation: &'static str,
        other: &Self,
        combine: impl Fn(F, F) -> F,
    ) -> Result<Self, AlgebraError> {
        if self.nr_rows != other.nr_rows || self.nr_columns != other.nr_columns {
            return Err(AlgebraError::DimensionMismatch {
                operation,
                left: (self.nr_rows, self.nr_columns),
                right: (other.nr_rows, other.nr_columns),
            });
        }

        Ok(Self {
            data: self.data.iter().zip(other.data.iter()).map(|(&a, &b)| combine(a, b)).collect(),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        })
    }

    /// Compute the standard matrix product `self * other`.
    ///
    /// Runs in `O(nr_rows * nr_columns * other.nr_columns)` time.
    ///
    /// # Errors
    ///
    /// `AlgebraError::DimensionMismatch` unless `self.nr_columns == other.nr_rows`.
    pub fn multiply(&self, other: &Self) -> Result<Self, AlgebraError> {
        if self.nr_columns != other.nr_rows {
            return Err(AlgebraError::DimensionMismatch {
                operation: "multiply",
                left: (self.nr_rows, self.nr_columns),
                right: (other.nr_rows, other.nr_columns),
            });
        }

        let mut product = Self::zeros(self.nr_rows, other.nr_columns);
        for i in 0..self.nr_rows {
            for j in 0..other.nr_columns {
                let mut total = F::zero();
                for k in 0..self.nr_columns {
                    total += self[(i, k)] * other[(k, j)];
                }
                product[(i, j)] = total;
            }
        }

        Ok(product)
    }

    /// Multiply every value in this matrix by a scalar.
    pub fn scale(&self, factor: F) -> Self {
        Self {
            data: self.data.iter().map(|&value| factor * value).collect(),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        }
    }

    /// Whether all values of two equally sized matrices differ by at most `tolerance`.
    ///
    /// Exact comparison is available through `PartialEq`; after floating point elimination it is
    /// fragile, as values that are mathematically equal often differ in their last bits.
    pub fn approx_eq(&self, other: &Self, tolerance: F) -> bool {
        debug_assert!(tolerance >= F::zero());

        self.nr_rows == other.nr_rows && self.nr_columns == other.nr_columns
            && self.data.iter().zip(other.data.iter()).all(|(&a, &b)| (a - b).abs() <= tolerance)
    }

    /// Create the transpose of this matrix, with `transposed[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::zeros(self.nr_columns, self.nr_rows);
        for i in 0..self.nr_rows {
            for j in 0..self.nr_columns {
                transposed[(j, i)] = self[(i, j)];
            }
        }

        transposed
    }

    /// Concatenate another matrix to the "right" (high column indices) of this matrix.
    ///
    /// # Errors
    ///
    /// `AlgebraError::DimensionMismatch` unless the numbers of rows are equal.
    pub fn hcat(&self, other: &Self) -> Result<Self, AlgebraError> {
        if self.nr_rows != other.nr_rows {
            return Err(AlgebraError::DimensionMismatch {
                operation: "hcat",
                left: (self.nr_rows, self.nr_columns),
                right: (other.nr_rows, other.nr_columns),
            });
        }

        let nr_columns = self.nr_columns + other.nr_columns;
        let mut data = Vec::with_capacity(self.nr_rows * nr_columns);
        for i in 0..self.nr_rows {
            data.extend_from_slice(self.row(i));
            data.extend_from_slice(other.row(i));
        }

        Ok(Self { data, nr_rows: self.nr_rows, nr_columns, })
    }

    /// Concatenate another matrix below (high row indices) this matrix.
    ///
    /// # Errors
    ///
    /// `AlgebraError::DimensionMismatch` unless the numbers of columns are equal.
    pub fn vcat(&self, other: &Self) -> Result<Self, AlgebraError> {
        if self.nr_columns != other.nr_columns {
            return Err(AlgebraError::DimensionMismatch {
                operation: "vcat",
                left: (self.nr_rows, self.nr_columns),
                right: (other.nr_rows, other.nr_columns),
            });
        }

        let mut data = self.data.clone();
        data.extend_from_slice(&other.data);

        Ok(Self { data, nr_rows: self.nr_rows + other.nr_rows, nr_columns: self.nr_columns, })
    }

    /// Project this matrix onto a subset of its columns.
    ///
    /// # Arguments
    ///
    /// * `columns`: Column indices to keep. They are sorted ascending before selection, so the
    /// order in which they are provided does not influence the result.
    ///
    /// # Errors
    ///
    /// `AlgebraError::OutOfRange` when an index lies beyond the declared number of columns.
    pub fn select_columns(&self, columns: &[usize]) -> Result<Self, AlgebraError> {
        debug_assert_ne!(columns.len(), 0);

        let mut columns = columns.to_vec();
        columns.sort_unstable();
        if let Some(&out_of_range) = columns.iter().find(|&&j| j >= self.nr_columns) {
            return Err(AlgebraError::OutOfRange {
                row: 0,
                column: out_of_range,
                nr_rows: self.nr_rows,
                nr_columns: self.nr_columns,
            });
        }

        let mut selection = Self::zeros(self.nr_rows, columns.len());
        for i in 0..self.nr_rows {
            for (new_j, &j) in columns.iter().enumerate() {
                selection[(i, new_j)] = self[(i, j)];
            }
        }

        Ok(selection)
    }

    /// Project this matrix onto a subset of its rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row indices to keep, sorted ascending before selection.
    ///
    /// # Errors
    ///
    /// `AlgebraError::OutOfRange` when an index lies beyond the declared number of rows.
    pub fn select_rows(&self, rows: &[usize]) -> Result<Self, AlgebraError> {
        debug_assert_ne!(rows.len(), 0);

        let mut rows = rows.to_vec();
        rows.sort_unstable();
        if let Some(&out_of_range) = rows.iter().find(|&&i| i >= self.nr_rows) {
            return Err(AlgebraError::OutOfRange {
                row: out_of_range,
                column: 0,
                nr_rows: self.nr_rows,
                nr_columns: self.nr_columns,
            });
        }

        let mut selection = Self::zeros(rows.len(), self.nr_columns);
        for (new_i, &i) in rows.iter().enumerate() {
            for j in 0..self.nr_columns {
                selection[(new_i, j)] = self[(i, j)];
            }
        }

        Ok(selection)
    }

    /// Exchange the values of rows `first` and `second`.
    pub(crate) fn swap_rows(&mut self, first: usize, second: usize) {
        debug_assert!(first < self.nr_rows);
        debug_assert!(second < self.nr_rows);

        if first == second {
            return;
        }
        for j in 0..self.nr_columns {
            self.data.swap(first * self.nr_columns + j, second * self.nr_columns + j);
        }
    }

    /// Add `factor` times row `read_row` to row `write_row`.
    pub(crate) fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read = self[(read_row, j)];
            self[(write_row, j)] += factor * read;
        }
    }

    /// Divide every value in row `i` from column `start_column` onward by `divisor`.
    ///
    /// Values left of `start_column` are known to be zero during elimination and are skipped.
    pub(crate) fn divide_row(&mut self, i: usize, start_column: usize, divisor: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert_ne!(divisor, F::zero());

        for j in start_column..self.nr_columns {
            self[(i, j)] = self[(i, j)] / divisor;
        }
    }
}

impl<F: Element> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        &self.data[row * self.nr_columns + column]
    }
}

impl<F: Element> IndexMut<(usize, usize)> for Matrix<F> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        &mut self.data[row * self.nr_columns + column]
    }
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use crate::data::linear_algebra::error::AlgebraError;
    use crate::data::linear_algebra::matrix::Matrix;

    fn test_matrix() -> Matrix<f64> {
        Matrix::from_data(vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 5_f64, 6_f64],
        ])
    }

    #[test]
    fn create() {
        let m = test_matrix();
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_approx_eq!(m[(0, 0)], 1_f64);
        assert_approx_eq!(m[(1, 2)], 6_f64);

        let m = Matrix::<f64>::zeros(299, 482);
        assert_approx_eq!(m[(0, 0)], 0_f64);
        assert_approx_eq!(m[(298, 481)], 0_f64);

        let m = Matrix::<f64>::ones(2, 4);
        assert_approx_eq!(m[(1, 3)], 1_f64);

        let m = Matrix::<f64>::identity(133);
        assert_approx_eq!(m[(0, 0)], 1_f64);
        assert_approx_eq!(m[(132, 132)], 1_f64);
        assert_approx_eq!(m[(0, 1)], 0_f64);
        assert_approx_eq!(m[(132, 0)], 0_f64);
    }

    #[test]
    fn get_set() {
        let mut m = test_matrix();

        assert_eq!(m.get_value(0, 1), Ok(2_f64));
        assert!(m.set_value(1, 1, 3.5_f64).is_ok());
        assert_eq!(m.get_value(1, 1), Ok(3.5_f64));

        assert_eq!(m.get_value(2, 0), Err(AlgebraError::OutOfRange {
            row: 2, column: 0, nr_rows: 2, nr_columns: 3,
        }));
        assert!(m.set_value(0, 3, 1_f64).is_err());
    }

    #[test]
    fn add_subtract() {
        let m = test_matrix();
        let total = m.add(&m).unwrap();
        assert_approx_eq!(total[(1, 0)], 8_f64);
        let difference = total.subtract(&m).unwrap();
        assert_eq!(difference, m);

        assert!(m.add(&Matrix::identity(2)).is_err());
        assert!(m.subtract(&m.transpose()).is_err());
    }

    #[test]
    fn multiply_square() {
        let a = Matrix::from_data(vec![vec![1_f64, 2_f64], vec![3_f64, 4_f64]]);
        let b = Matrix::from_data(vec![vec![4_f64, 3_f64], vec![2_f64, 1_f64]]);

        let ab = a.multiply(&b).unwrap();
        assert_eq!(ab, Matrix::from_data(vec![vec![8_f64, 5_f64], vec![20_f64, 13_f64]]));

        let ba = b.multiply(&a).unwrap();
        assert_eq!(ba, Matrix::from_data(vec![vec![13_f64, 20_f64], vec![5_f64, 8_f64]]));
    }

    #[test]
    fn multiply_rectangular() {
        let a = test_matrix();
        let b = Matrix::from_data(vec![
            vec![1_f64, 2_f64],
            vec![3_f64, 4_f64],
            vec![5_f64, 6_f64],
        ]);

        let ab = a.multiply(&b).unwrap();
        assert_eq!(ab, Matrix::from_data(vec![vec![22_f64, 28_f64], vec![49_f64, 64_f64]]));

        let ba = b.multiply(&a).unwrap();
        assert_eq!(ba, Matrix::from_data(vec![
            vec![9_f64, 12_f64, 15_f64],
            vec![19_f64, 26_f64, 33_f64],
            vec![29_f64, 40_f64, 51_f64],
        ]));

        assert!(a.multiply(&a).is_err());
    }

    #[test]
    fn equality() {
        let m = test_matrix();
        assert_eq!(m, m.clone());
        assert_ne!(m, m.scale(2_f64));

        let almost = m.add(&Matrix::ones(2, 3).scale(1e-9_f64)).unwrap();
        assert_ne!(m, almost);
        assert!(m.approx_eq(&almost, 1e-6_f64));
        assert!(!m.approx_eq(&almost, 1e-12_f64));
        assert!(!m.approx_eq(&m.transpose(), 1e-6_f64));
    }

    #[test]
    fn transpose() {
        let m = test_matrix();
        assert_eq!(m.transpose(), Matrix::from_data(vec![
            vec![1_f64, 4_f64],
            vec![2_f64, 5_f64],
            vec![3_f64, 6_f64],
        ]));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn compose() {
        let m = Matrix::from_data(vec![vec![1_f64, 2_f64], vec![3_f64, 4_f64], vec![5_f64, 6_f64]]);
        assert_eq!(m.vcat(&Matrix::identity(2)).unwrap(), Matrix::from_data(vec![
            vec![1_f64, 2_f64],
            vec![3_f64, 4_f64],
            vec![5_f64, 6_f64],
            vec![1_f64, 0_f64],
            vec![0_f64, 1_f64],
        ]));
        assert!(m.vcat(&Matrix::identity(3)).is_err());

        let m = Matrix::from_data(vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 5_f64, 6_f64],
            vec![7_f64, 8_f64, 9_f64],
        ]);
        assert_eq!(m.hcat(&Matrix::identity(3)).unwrap(), Matrix::from_data(vec![
            vec![1_f64, 2_f64, 3_f64, 1_f64, 0_f64, 0_f64],
            vec![4_f64, 5_f64, 6_f64, 0_f64, 1_f64, 0_f64],
            vec![7_f64, 8_f64, 9_f64, 0_f64, 0_f64, 1_f64],
        ]));
        assert!(m.hcat(&Matrix::identity(2)).is_err());
    }

    #[test]
    fn select() {
        let m = Matrix::from_data(vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 5_f64, 6_f64],
            vec![7_f64, 8_f64, 9_f64],
        ]);

        let selection = m.select_columns(&[0, 2]).unwrap();
        assert_eq!(selection, Matrix::from_data(vec![
            vec![1_f64, 3_f64],
            vec![4_f64, 6_f64],
            vec![7_f64, 9_f64],
        ]));
        // Selection sorts the indices first, the provided order is irrelevant.
        assert_eq!(m.select_columns(&[2, 0]).unwrap(), selection);
        assert!(m.select_columns(&[0, 3]).is_err());

        assert_eq!(m.select_rows(&[1]).unwrap(), Matrix::from_data(vec![
            vec![4_f64, 5_f64, 6_f64],
        ]));
        assert!(m.select_rows(&[5]).is_err());
    }

    #[test]
    fn scale() {
        let m = test_matrix();
        let scaled = m.scale(-2_f64);
        assert_approx_eq!(scaled[(0, 0)], -2_f64);
        assert_approx_eq!(scaled[(1, 2)], -12_f64);
        assert_eq!(m.scale(1_f64), m);
    }

    #[test]
    fn row_column() {
        let m = test_matrix();
        assert_eq!(m.row(1), &[4_f64, 5_f64, 6_f64]);
        assert_eq!(m.column(2), vec![3_f64, 6_f64]);
    }

    #[test]
    fn row_operations() {
        let mut m = test_matrix();
        m.swap_rows(0, 1);
        assert_eq!(m, Matrix::from_data(vec![
            vec![4_f64, 5_f64, 6_f64],
            vec![1_f64, 2_f64, 3_f64],
        ]));

        let mut m = test_matrix();
        m.mul_add_rows(0, 1, -4_f64);
        assert_eq!(m, Matrix::from_data(vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![0_f64, -3_f64, -6_f64],
        ]));

        let mut m = test_matrix();
        m.divide_row(1, 1, 2_f64);
        assert_eq!(m, Matrix::from_data(vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 2.5_f64, 3_f64],
        ]));
    }
}
