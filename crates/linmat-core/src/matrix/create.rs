//! Matrix creation: dimensioned, filled, identity, nested literals and
//! element-type conversion.

use num_traits::NumCast;

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::{Matrix, check_dimensions};

/// Build a [`Matrix`] from nested row literals.
///
/// Expands to [`Matrix::from_row_slices`], so the result is a
/// [`Result`](crate::Result): rows of unequal length are rejected with
/// [`CoreError::InvalidShape`](crate::CoreError::InvalidShape).
///
/// ```
/// # use linmat_core::matrix;
/// let m = matrix![[1.0, 2.0], [3.0, 4.0]].unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert!(matrix![[1, 2], [3]].is_err());
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Matrix::from_row_slices(&[$(&[$($x),*][..]),+])
    };
}

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x columns` matrix filled with zeros.
    ///
    /// Returns [`CoreError::InvalidDimension`] if either dimension is zero or
    /// the element count cannot be allocated.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let m = Matrix::<f64>::new(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::filled(rows, columns, T::zero())
    }

    /// Alias of [`new`](Self::new).
    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        Self::new(rows, columns)
    }

    /// Create a `rows x columns` matrix filled with a constant value.
    pub fn filled(rows: usize, columns: usize, value: T) -> Result<Self> {
        let len = check_dimensions(rows, columns)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| CoreError::InvalidDimension { rows, columns })?;
        data.resize(len, value);
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Create a zeroed column vector with `rows` rows.
    pub fn column_vector(rows: usize) -> Result<Self> {
        Self::new(rows, 1)
    }

    /// Create a column vector from a flat list of values.
    pub fn from_column(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(CoreError::InvalidShape {
                shape: vec![0, 1],
                reason: "column literal is empty",
            });
        }
        let rows = values.len();
        Self::from_vec(rows, 1, values)
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let eye = Matrix::<f64>::identity(3).unwrap();
    /// assert_eq!(eye[(1, 1)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Create a matrix from nested row groups: outer groups are rows, inner
    /// groups are the columns of that row.
    ///
    /// Fails with [`CoreError::InvalidShape`] if there are no rows, the
    /// first row is empty, or any row's length differs from the first.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let m = Matrix::<i32>::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let slices: Vec<&[T]> = rows.iter().map(AsRef::as_ref).collect();
        Self::from_row_slices(&slices)
    }

    /// Create a matrix from a list of row slices. See [`from_rows`](Self::from_rows).
    pub fn from_row_slices(rows: &[&[T]]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(CoreError::InvalidShape {
                shape: vec![0, 0],
                reason: "nested literal has no rows",
            });
        };
        let columns = first.len();
        if columns == 0 {
            return Err(CoreError::InvalidShape {
                shape: vec![rows.len(), 0],
                reason: "nested literal has an empty row",
            });
        }

        let mut data = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            if row.len() != columns {
                return Err(CoreError::InvalidShape {
                    shape: vec![rows.len(), row.len()],
                    reason: "nested literal rows have different lengths",
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), columns, data)
    }

    /// Lossless element-wise conversion to another element type.
    ///
    /// ```
    /// # use linmat_core::Matrix;
    /// let a = Matrix::from_vec(1, 2, vec![1_i32, 2]).unwrap();
    /// let b: Matrix<f64> = a.convert();
    /// assert_eq!(b.as_slice(), &[1.0, 2.0]);
    /// ```
    pub fn convert<U>(&self) -> Matrix<U>
    where
        U: Scalar + From<T>,
    {
        self.map(<U as From<T>>::from)
    }

    /// Checked element-wise conversion to another element type.
    ///
    /// Fails with [`CoreError::InvalidConversion`] at the first element
    /// that `U` cannot represent (e.g. a negative value into `u8`, or NaN
    /// into an integer type). Float-to-integer conversion truncates.
    pub fn cast<U: Scalar>(&self) -> Result<Matrix<U>> {
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                <U as NumCast>::from(x).ok_or_else(|| CoreError::InvalidConversion {
                    row: i / self.columns,
                    column: i % self.columns,
                })
            })
            .collect::<Result<Vec<U>>>()?;
        Ok(Matrix {
            data,
            rows: self.rows,
            columns: self.columns,
        })
    }
}
