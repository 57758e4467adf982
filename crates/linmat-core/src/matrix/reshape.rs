//! Shape manipulation: reshape, transpose, horizontal concatenation and
//! row/column deletion.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Reinterpret the storage with new dimensions, without moving data.
    ///
    /// `rows * columns` must equal the current element count and both must
    /// be positive; otherwise fails with [`CoreError::InvalidShape`] and the
    /// matrix is left as it was.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let mut m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// m.reshape(3, 2).unwrap();
    /// assert_eq!(m[(2, 0)], 5);
    /// ```
    pub fn reshape(&mut self, rows: usize, columns: usize) -> Result<()> {
        if rows == 0 || columns == 0 {
            return Err(CoreError::InvalidShape {
                shape: vec![rows, columns],
                reason: "reshape dimensions must be positive",
            });
        }
        if rows.checked_mul(columns) != Some(self.len()) {
            return Err(CoreError::InvalidShape {
                shape: vec![rows, columns],
                reason: "new shape has different number of elements",
            });
        }
        self.rows = rows;
        self.columns = columns;
        Ok(())
    }

    /// Consuming variant of [`reshape`](Self::reshape).
    pub fn reshaped(mut self, rows: usize, columns: usize) -> Result<Self> {
        self.reshape(rows, columns)?;
        Ok(self)
    }

    /// Return the `columns x rows` transpose with copied data.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.rows, self.columns);
        let mut data = vec![T::zero(); self.data.len()];

        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }

        Matrix {
            data,
            rows: cols,
            columns: rows,
        }
    }

    /// Concatenate `other` to the right of `self`.
    ///
    /// Both matrices must have the same number of rows; otherwise fails with
    /// [`CoreError::DimensionMismatch`].
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let a = Matrix::from_vec(2, 1, vec![1, 2]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![3, 4, 5, 6]).unwrap();
    /// let c = a.concatenate(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[1, 3, 4, 2, 5, 6]);
    /// ```
    pub fn concatenate(&self, other: &Matrix<T>) -> Result<Self> {
        if self.rows != other.rows {
            return Err(CoreError::DimensionMismatch {
                expected: (self.rows, other.columns),
                got: other.shape(),
            });
        }

        let columns = self.columns + other.columns;
        let mut data = Vec::with_capacity(self.rows * columns);
        for r in 0..self.rows {
            data.extend_from_slice(self.row_slice(r));
            data.extend_from_slice(other.row_slice(r));
        }

        Ok(Matrix {
            data,
            rows: self.rows,
            columns,
        })
    }

    /// Copy of `self` with row `skip_row` and column `skip_column` removed
    /// (both 0-based). The caller guarantees `self` is at least 2x2 and the
    /// indices are in range.
    pub(crate) fn without_row_column(&self, skip_row: usize, skip_column: usize) -> Self {
        let rows = self.rows - 1;
        let columns = self.columns - 1;
        let mut data = Vec::with_capacity(rows * columns);
        for r in (0..self.rows).filter(|&r| r != skip_row) {
            let row = self.row_slice(r);
            data.extend_from_slice(&row[..skip_column]);
            data.extend_from_slice(&row[skip_column + 1..]);
        }
        Matrix {
            data,
            rows,
            columns,
        }
    }
}
