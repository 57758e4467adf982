//! Elimination-based linear algebra on [`Matrix`].
//!
//! | Module       | Operations                                              |
//! |--------------|---------------------------------------------------------|
//! | [`gauss`]    | `gauss_forward`, `gauss_back`, `reduced_row_echelon`, `rank` |
//! | [`det`]      | `det`, `trace`, `norm`                                  |
//! | [`cofactor`] | `minor`, `cofactor`, `adjugate`, `invert`               |
//!
//! Every routine is also available as a method on [`Matrix`]; the free
//! functions below are the same operations in function-call form.

pub mod cofactor;
pub mod det;
pub mod gauss;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::{Float, Scalar};

/// `columns x rows` transpose of `m`.
pub fn transpose<T: Scalar>(m: &Matrix<T>) -> Matrix<T> {
    m.transpose()
}

/// Horizontal concatenation `[m1 | m2]`.
pub fn concatenate<T: Scalar>(m1: &Matrix<T>, m2: &Matrix<T>) -> Result<Matrix<T>> {
    m1.concatenate(m2)
}

/// Minor of `m` at 1-based `(row, column)`. See [`Matrix::minor`].
pub fn minor<T: Float>(m: &Matrix<T>, row: usize, column: usize) -> Result<T> {
    m.minor(row, column)
}

/// Cofactor of `m` at 1-based `(row, column)`. See [`Matrix::cofactor`].
pub fn cofactor<T: Float>(m: &Matrix<T>, row: usize, column: usize) -> Result<T> {
    m.cofactor(row, column)
}

/// Inverse of a square, non-singular matrix.
///
/// ```
/// # use linmat_core::{linalg, matrix, CoreError};
/// let a = matrix![[1.0, 2.0], [2.0, 4.0]].unwrap();
/// assert_eq!(linalg::invert(&a).unwrap_err(), CoreError::SingularMatrix);
/// ```
pub fn invert<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    m.invert()
}

/// Determinant of a square matrix.
pub fn det<T: Float>(m: &Matrix<T>) -> Result<T> {
    m.det()
}

/// Trace of a square matrix.
pub fn trace<T: Scalar>(m: &Matrix<T>) -> Result<T> {
    m.trace()
}

/// Rank of `m`.
pub fn rank<T: Float>(m: &Matrix<T>) -> usize {
    m.rank()
}

/// Frobenius norm of `m`.
pub fn norm<T: Float>(m: &Matrix<T>) -> T {
    m.norm()
}

/// Row-echelon copy of `m`. See [`Matrix::gauss_forward`].
pub fn gauss_forward<T: Float>(m: &Matrix<T>) -> Matrix<T> {
    m.gauss_forward()
}

/// Reduced copy of a step-form `m`. See [`Matrix::gauss_back`].
pub fn gauss_back<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    m.gauss_back()
}
