//! Dense 2-D matrix with contiguous row-major storage.
//!
//! The [`Matrix`] type owns a flat buffer of `rows * columns` elements and is
//! generic over any type implementing [`Scalar`]. Element `(i, j)` lives at
//! storage offset `i * columns + j`.

mod compare;
mod create;
mod display;
mod ops;
mod reshape;

use core::ops::{Index, IndexMut};

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A dense, resizable 2-D matrix.
///
/// Cloning performs a deep copy. The [`Default`] value is the *empty*
/// matrix: zero rows, zero columns and no storage. Every other matrix has
/// at least one row and one column.
///
/// # Type Parameters
///
/// - `T`: The element type, which must implement [`Scalar`].
#[derive(Debug, Clone, Default)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from a flat row-major data vector.
    ///
    /// Returns [`CoreError::InvalidDimension`] if either dimension is zero
    /// or their product overflows `usize`, and [`CoreError::InvalidShape`] if `rows * columns != data.len()`.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(*m.at(1, 0).unwrap(), 4);
    /// ```
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self> {
        if check_dimensions(rows, columns)? != data.len() {
            return Err(CoreError::InvalidShape {
                shape: vec![rows, columns],
                reason: "shape product does not match data length",
            });
        }
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Create a matrix from a flat slice (copies the data).
    pub fn from_slice(rows: usize, columns: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(rows, columns, data.to_vec())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether this is the empty (zero-sized) matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Number of elements the storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// A flat row-major slice of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat row-major slice of all elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Move the contents out, leaving `self` as the empty matrix.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let mut a = Matrix::<f64>::identity(2).unwrap();
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.shape(), (2, 2));
    /// ```
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Storage offset of `(row, column)`, or an error that leaves the
    /// matrix untouched.
    fn offset(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(CoreError::IndexOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }

    /// Reference to the element at `(row, column)`.
    ///
    /// ```
    /// # use linmat_core::{Matrix, CoreError};
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(*m.at(0, 1).unwrap(), 2.0);
    /// assert!(matches!(m.at(5, 5), Err(CoreError::IndexOutOfRange { .. })));
    /// ```
    pub fn at(&self, row: usize, column: usize) -> Result<&T> {
        let offset = self.offset(row, column)?;
        Ok(&self.data[offset])
    }

    /// Mutable reference to the element at `(row, column)`.
    pub fn at_mut(&mut self, row: usize, column: usize) -> Result<&mut T> {
        let offset = self.offset(row, column)?;
        Ok(&mut self.data[offset])
    }

    /// Set the element at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        *self.at_mut(row, column)? = value;
        Ok(())
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(CoreError::IndexOutOfRange {
                row,
                column: 0,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.row_slice(row))
    }

    #[inline]
    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        &self.data[row * self.columns..(row + 1) * self.columns]
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        if let Some(row) = [a, b].into_iter().find(|&r| r >= self.rows) {
            return Err(CoreError::IndexOutOfRange {
                row,
                column: 0,
                rows: self.rows,
                columns: self.columns,
            });
        }
        self.swap_rows_unchecked(a, b);
        Ok(())
    }

    pub(crate) fn swap_rows_unchecked(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let cols = self.columns;
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Map / apply
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        U: Scalar,
        F: Fn(T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Apply a function element-wise to two matrices of the same shape.
    pub fn zip_map<F>(&self, other: &Matrix<T>, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            columns: self.columns,
        })
    }

    /// Apply a function to every element in place.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for x in &mut self.data {
            *x = f(*x);
        }
    }

    pub(crate) fn check_same_shape(&self, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(CoreError::DimensionMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_square(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(CoreError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.rows)
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the index is out of range; use [`Matrix::at`] for a
    /// fallible lookup.
    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of range for {}x{} matrix",
            self.rows,
            self.columns,
        );
        &self.data[row * self.columns + column]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of range for {}x{} matrix",
            self.rows,
            self.columns,
        );
        &mut self.data[row * self.columns + column]
    }
}

// ======================================================================
// Utility functions
// ======================================================================

/// Element count of a `rows x columns` matrix. Rejects zero row or column
/// counts and products that overflow `usize`.
pub(crate) fn check_dimensions(rows: usize, columns: usize) -> Result<usize> {
    match rows.checked_mul(columns) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(CoreError::InvalidDimension { rows, columns }),
    }
}
