//! Minors, cofactors and the adjugate inverse.
//!
//! Row and column numbers in this module are 1-based. `invert` builds the
//! full cofactor matrix, one determinant per entry, so its cost grows as
//! `O(n^5)`; it is meant for small matrices.

use log::debug;

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

impl<T: Float> Matrix<T> {
    /// Determinant of the submatrix left after deleting row `row` and
    /// column `column` (1-based). The minor of a 1x1 matrix is `1`.
    ///
    /// Fails with [`CoreError::NotSquare`] for rectangular input,
    /// [`CoreError::TooSmall`] for the empty matrix and
    /// [`CoreError::IndexOutOfRange`] when `row` or `column` is `0` or past
    /// the last row/column.
    ///
    /// ```
    /// # use linmat_core::matrix;
    /// let a = matrix![[1.0, 2.0], [3.0, 4.0]].unwrap();
    /// assert_eq!(a.minor(1, 1).unwrap(), 4.0);
    /// assert_eq!(a.minor(1, 2).unwrap(), 3.0);
    /// ```
    pub fn minor(&self, row: usize, column: usize) -> Result<T> {
        let n = self.check_square()?;
        if n < 1 {
            return Err(CoreError::TooSmall {
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        if row == 0 || row > n || column == 0 || column > n {
            return Err(CoreError::IndexOutOfRange {
                row,
                column,
                rows: n,
                columns: n,
            });
        }
        if n == 1 {
            return Ok(T::one());
        }
        self.without_row_column(row - 1, column - 1).det()
    }

    /// Signed minor: `(-1)^(row + column) * minor(row, column)`.
    pub fn cofactor(&self, row: usize, column: usize) -> Result<T> {
        let minor = self.minor(row, column)?;
        Ok(if (row + column) % 2 == 0 { minor } else { -minor })
    }

    /// Matrix whose `(i, j)` entry is `cofactor(i + 1, j + 1)`.
    pub fn cofactor_matrix(&self) -> Result<Matrix<T>> {
        let n = self.check_square()?;
        let mut out = self.clone();
        for i in 0..n {
            for j in 0..n {
                out[(i, j)] = self.cofactor(i + 1, j + 1)?;
            }
        }
        Ok(out)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix<T>> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Inverse via the adjugate: `adj(A) / det(A)`.
    ///
    /// Fails with [`CoreError::NotSquare`] for rectangular input and with
    /// [`CoreError::SingularMatrix`] when `|det(A)|` is below
    /// [`EPSILON`](crate::EPSILON).
    ///
    /// ```
    /// # use linmat_core::{matrix, Matrix};
    /// let a = matrix![[4.0, 7.0], [2.0, 6.0]].unwrap();
    /// let inv = a.invert().unwrap();
    /// assert_eq!(&a * &inv, Matrix::<f64>::identity(2).unwrap());
    /// ```
    pub fn invert(&self) -> Result<Matrix<T>> {
        self.check_square()?;
        let det = self.det()?;
        if det.is_negligible() {
            debug!("invert: determinant {det} is within tolerance of zero");
            return Err(CoreError::SingularMatrix);
        }
        Ok(self.adjugate()?.scale(det.recip()))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn m(n: usize, data: &[f64]) -> Matrix<f64> {
        Matrix::from_slice(n, n, data).unwrap()
    }

    #[test]
    fn test_minor_3x3() {
        // [[1, 2, 3],
        //  [4, 5, 6],
        //  [7, 8, 10]]
        let a = m(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
        // delete row 1, column 1: [[5, 6], [8, 10]] -> 50 - 48
        assert_abs_diff_eq!(a.minor(1, 1).unwrap(), 2.0, epsilon = 1e-12);
        // delete row 2, column 3: [[1, 2], [7, 8]] -> 8 - 14
        assert_abs_diff_eq!(a.minor(2, 3).unwrap(), -6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_minor_1x1_is_one() {
        let a = m(1, &[42.0]);
        assert_eq!(a.minor(1, 1).unwrap(), 1.0);
    }

    #[test]
    fn test_minor_errors() {
        let rect = Matrix::<f64>::new(2, 3).unwrap();
        assert!(matches!(rect.minor(1, 1), Err(CoreError::NotSquare { .. })));

        let empty = Matrix::<f64>::default();
        assert!(matches!(empty.minor(1, 1), Err(CoreError::TooSmall { .. })));

        let a = m(2, &[1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(a.minor(0, 1), Err(CoreError::IndexOutOfRange { .. })));
        assert!(matches!(a.minor(1, 3), Err(CoreError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_cofactor_signs() {
        let a = m(2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.cofactor(1, 1).unwrap(), 4.0);
        assert_eq!(a.cofactor(1, 2).unwrap(), -3.0);
        assert_eq!(a.cofactor(2, 1).unwrap(), -2.0);
        assert_eq!(a.cofactor(2, 2).unwrap(), 1.0);
    }

    #[test]
    fn test_adjugate() {
        let a = m(2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.adjugate().unwrap(), m(2, &[4.0, -2.0, -3.0, 1.0]));
    }

    #[test]
    fn test_invert_2x2() {
        let a = m(2, &[1.0, 2.0, 3.0, 4.0]);
        let inv = a.invert().unwrap();
        assert_eq!(inv, m(2, &[-2.0, 1.0, 1.5, -0.5]));
    }

    #[test]
    fn test_invert_3x3_roundtrip() {
        let a = m(3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]);
        let inv = a.invert().unwrap();
        let eye = Matrix::<f64>::identity(3).unwrap();
        assert_eq!(&a * &inv, eye);
        assert_eq!(&inv * &a, eye);
        assert_eq!(inv.invert().unwrap(), a);
    }

    #[test]
    fn test_invert_1x1() {
        let a = m(1, &[4.0]);
        assert_eq!(a.invert().unwrap(), m(1, &[0.25]));
    }

    #[test]
    fn test_invert_singular() {
        let a = m(2, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(a.invert().unwrap_err(), CoreError::SingularMatrix);
    }

    #[test]
    fn test_invert_not_square() {
        let a = Matrix::<f64>::new(3, 2).unwrap();
        assert!(matches!(a.invert(), Err(CoreError::NotSquare { .. })));
    }
}
