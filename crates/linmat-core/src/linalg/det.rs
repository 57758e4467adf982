//! Scalar summaries of a matrix: determinant, trace and Frobenius norm.

use log::trace;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::{Float, Scalar};

use super::gauss::{pivot_row, sub_scaled_row};

impl<T: Float> Matrix<T> {
    /// Determinant of a square matrix.
    ///
    /// Eliminates a private copy with partial pivoting, flipping the sign on
    /// every row swap, and multiplies the resulting diagonal. When a column
    /// has no pivot above [`EPSILON`](crate::EPSILON) the pivot row is kept
    /// and retried on the next column; such a matrix is singular and the
    /// determinant is exactly zero. The empty matrix has determinant `1`.
    ///
    /// Fails with [`CoreError::NotSquare`](crate::CoreError::NotSquare) for
    /// rectangular input.
    ///
    /// ```
    /// # use linmat_core::matrix;
    /// let a = matrix![[1.0_f64, 2.0], [3.0, 4.0]].unwrap();
    /// assert!((a.det().unwrap() + 2.0).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> Result<T> {
        let n = self.check_square()?;
        let mut a = self.clone();
        let mut sign = T::one();
        let mut singular = false;

        let (mut row, mut col) = (0, 0);
        while row < n && col < n {
            let best = pivot_row(&a, col, row);
            if a[(best, col)].is_negligible() {
                trace!("det: no pivot in column {col}, retrying row {row}");
                singular = true;
                col += 1;
                continue;
            }
            if best != row {
                a.swap_rows_unchecked(row, best);
                sign = -sign;
            }

            let pivot = a[(row, col)];
            for h in row + 1..n {
                let factor = a[(h, col)] / pivot;
                sub_scaled_row(&mut a, h, row, factor, col);
            }
            row += 1;
            col += 1;
        }

        if singular {
            return Ok(T::zero());
        }
        Ok((0..n).fold(sign, |acc, i| acc * a[(i, i)]))
    }

    /// Frobenius norm: square root of the sum of squares of all elements.
    ///
    /// ```
    /// # use linmat_core::matrix;
    /// let a = matrix![[3.0, 0.0], [0.0, 4.0]].unwrap();
    /// assert_eq!(a.norm(), 5.0);
    /// ```
    pub fn norm(&self) -> T {
        self.iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }
}

impl<T: Scalar> Matrix<T> {
    /// Sum of the diagonal of a square matrix.
    ///
    /// Fails with [`CoreError::NotSquare`](crate::CoreError::NotSquare) for
    /// rectangular input.
    pub fn trace(&self) -> Result<T> {
        let n = self.check_square()?;
        Ok((0..n).fold(T::zero(), |acc, i| acc + self[(i, i)]))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::error::CoreError;

    use super::*;

    fn m(n: usize, data: &[f64]) -> Matrix<f64> {
        Matrix::from_slice(n, n, data).unwrap()
    }

    #[test]
    fn test_det_2x2() {
        let d = m(2, &[1.0, 2.0, 3.0, 4.0]).det().unwrap();
        assert!((d + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_det_3x3() {
        // first-row expansion: 2 * (1 - 0) - 0 + 1 * (3 - 0) = 5
        let a = m(3, &[2.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 3.0, 1.0]);
        assert!((a.det().unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_det_sign_from_swaps() {
        let p = m(3, &[0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert!((p.det().unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_det_singular_is_zero() {
        assert_eq!(m(2, &[1.0, 2.0, 2.0, 4.0]).det().unwrap(), 0.0);
        assert_eq!(m(3, &[0.0; 9]).det().unwrap(), 0.0);
        let a = m(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert!(a.det().unwrap().abs() < 1e-8);
    }

    #[test]
    fn test_det_identity_and_scaled() {
        assert_eq!(Matrix::<f64>::identity(5).unwrap().det().unwrap(), 1.0);
        let d = m(2, &[2.0, 0.0, 0.0, 2.0]).det().unwrap();
        assert!((d - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_det_not_square() {
        let a = Matrix::<f64>::new(2, 3).unwrap();
        assert_eq!(
            a.det().unwrap_err(),
            CoreError::NotSquare {
                rows: 2,
                columns: 3
            }
        );
    }

    #[test]
    fn test_det_leaves_source() {
        let a = m(2, &[1.0, 2.0, 3.0, 4.0]);
        let _ = a.det().unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_det_empty() {
        assert_eq!(Matrix::<f64>::default().det().unwrap(), 1.0);
    }

    #[test]
    fn test_trace() {
        assert_eq!(m(2, &[1.0, 2.0, 3.0, 4.0]).trace().unwrap(), 5.0);
        let ints = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(ints.trace().unwrap(), 5);
        assert!(Matrix::<i32>::new(1, 2).unwrap().trace().is_err());
    }

    #[test]
    fn test_norm() {
        let a = Matrix::from_vec(2, 2, vec![1.0, -1.0, 1.0, -1.0]).unwrap();
        assert_eq!(a.norm(), 2.0);
        assert_eq!(Matrix::<f64>::new(2, 2).unwrap().norm(), 0.0);
    }
}
