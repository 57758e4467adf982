//! Gaussian elimination: forward pass to row-echelon form, backward pass to
//! reduced form, and rank.
//!
//! Every public entry point works on its own copy of the matrix (or on a
//! matrix it owns), so a caller's matrix is never left half-eliminated.

use log::{debug, trace};

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

impl<T: Float> Matrix<T> {
    /// Forward elimination with partial pivoting, returning a row-echelon
    /// copy of `self`.
    ///
    /// For each column the row with the largest magnitude at or below the
    /// current pivot row becomes the pivot. A column whose best candidate is
    /// below [`EPSILON`](crate::EPSILON) is skipped and the same pivot row is
    /// retried on the next column.
    ///
    /// ```
    /// # use linmat_core::matrix;
    /// let a = matrix![[1.0, 2.0], [3.0, 4.0]].unwrap();
    /// let r = a.gauss_forward();
    /// assert_eq!(r, matrix![[3.0, 4.0], [0.0, 2.0 / 3.0]].unwrap());
    /// ```
    pub fn gauss_forward(&self) -> Matrix<T> {
        self.clone().into_gauss_forward()
    }

    /// Consuming variant of [`gauss_forward`](Self::gauss_forward).
    pub fn into_gauss_forward(mut self) -> Matrix<T> {
        forward_eliminate(&mut self);
        self
    }

    /// Backward elimination: zero the entries above every pivot of a matrix
    /// already in step form. Pivots are not rescaled.
    ///
    /// Fails with [`CoreError::NotStepForm`] if `self` is not in step form
    /// (see [`is_step_form`](Self::is_step_form)).
    ///
    /// ```
    /// # use linmat_core::matrix;
    /// let a = matrix![[2.0, 4.0], [0.0, 1.0]].unwrap();
    /// assert_eq!(a.gauss_back().unwrap(), matrix![[2.0, 0.0], [0.0, 1.0]].unwrap());
    /// assert!(matrix![[0.0, 1.0], [1.0, 0.0]].unwrap().gauss_back().is_err());
    /// ```
    pub fn gauss_back(&self) -> Result<Matrix<T>> {
        self.clone().into_gauss_back()
    }

    /// Consuming variant of [`gauss_back`](Self::gauss_back).
    pub fn into_gauss_back(mut self) -> Result<Matrix<T>> {
        check_step_form(&self)?;
        back_eliminate(&mut self);
        Ok(self)
    }

    /// Whether `self` is in step (row-echelon) form: every non-zero row has
    /// its leading entry strictly right of the previous non-zero row's, and
    /// no later row has a non-zero entry in an earlier leading column.
    /// All-zero rows may appear anywhere.
    pub fn is_step_form(&self) -> bool {
        check_step_form(self).is_ok()
    }

    /// Reduced row-echelon form: forward and backward elimination followed
    /// by scaling every pivot to `1`.
    pub fn reduced_row_echelon(&self) -> Matrix<T> {
        let mut m = self.clone();
        forward_eliminate(&mut m);
        back_eliminate(&mut m);

        let cols = m.columns();
        for r in 0..m.rows() {
            let Some(lead) = leading_column(m.row_slice(r)) else {
                continue;
            };
            let pivot = m[(r, lead)];
            let row = &mut m.as_mut_slice()[r * cols..(r + 1) * cols];
            for x in row.iter_mut() {
                *x = *x / pivot;
            }
        }
        m
    }

    /// Number of linearly independent rows.
    ///
    /// Runs forward then backward elimination on a copy and counts the rows
    /// holding at least one entry whose magnitude exceeds
    /// [`EPSILON`](crate::EPSILON).
    ///
    /// ```
    /// # use linmat_core::matrix;
    /// let a = matrix![[1.0, 2.0], [2.0, 4.0]].unwrap();
    /// assert_eq!(a.rank(), 1);
    /// ```
    pub fn rank(&self) -> usize {
        let mut m = self.clone();
        forward_eliminate(&mut m);
        back_eliminate(&mut m);

        let rank = (0..m.rows())
            .filter(|&r| leading_column(m.row_slice(r)).is_some())
            .count();
        debug!("rank of {}x{} matrix: {rank}", self.rows(), self.columns());
        rank
    }
}

// ======================================================================
// Kernels
// ======================================================================

/// Row index in `start..rows` holding the largest `|m[(r, col)]|`. Ties go
/// to the topmost row.
pub(super) fn pivot_row<T: Float>(m: &Matrix<T>, col: usize, start: usize) -> usize {
    (start + 1..m.rows()).fold(start, |best, r| {
        if m[(r, col)].abs() > m[(best, col)].abs() {
            r
        } else {
            best
        }
    })
}

/// `row[target] -= factor * row[source]` over columns `from..`.
pub(super) fn sub_scaled_row<T: Float>(
    m: &mut Matrix<T>,
    target: usize,
    source: usize,
    factor: T,
    from: usize,
) {
    let cols = m.columns();
    let data = m.as_mut_slice();
    for k in from..cols {
        let s = data[source * cols + k];
        let t = &mut data[target * cols + k];
        *t = *t - factor * s;
    }
}

/// First column of `row` holding a non-negligible entry.
fn leading_column<T: Float>(row: &[T]) -> Option<usize> {
    row.iter().position(|&x| !x.is_negligible())
}

fn forward_eliminate<T: Float>(m: &mut Matrix<T>) {
    let (rows, cols) = m.shape();
    let mut row = 0;

    for col in 0..cols {
        if row == rows {
            break;
        }

        let best = pivot_row(m, col, row);
        if m[(best, col)].is_negligible() {
            trace!("gauss_forward: no pivot in column {col} from row {row}, skipping column");
            continue;
        }
        if best != row {
            trace!("gauss_forward: swapping rows {row} and {best}");
            m.swap_rows_unchecked(row, best);
        }

        let pivot = m[(row, col)];
        for h in row + 1..rows {
            let factor = m[(h, col)] / pivot;
            sub_scaled_row(m, h, row, factor, 0);
            // exact zero below the pivot, not a rounding residue
            m[(h, col)] = T::zero();
        }
        row += 1;
    }
}

fn back_eliminate<T: Float>(m: &mut Matrix<T>) {
    for i in (0..m.rows()).rev() {
        let Some(lead) = leading_column(m.row_slice(i)) else {
            continue;
        };
        let pivot = m[(i, lead)];
        for k in 0..i {
            let factor = m[(k, lead)] / pivot;
            sub_scaled_row(m, k, i, factor, 0);
            m[(k, lead)] = T::zero();
        }
    }
}

fn check_step_form<T: Float>(m: &Matrix<T>) -> Result<()> {
    let mut previous_lead: Option<usize> = None;

    for r in 0..m.rows() {
        let Some(lead) = leading_column(m.row_slice(r)) else {
            continue;
        };
        if previous_lead.is_some_and(|p| p >= lead) {
            return Err(CoreError::NotStepForm { row: r });
        }
        if let Some(k) = (r + 1..m.rows()).find(|&k| !m[(k, lead)].is_negligible()) {
            return Err(CoreError::NotStepForm { row: k });
        }
        previous_lead = Some(lead);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn m(rows: usize, cols: usize, data: &[f64]) -> Matrix<f64> {
        Matrix::from_slice(rows, cols, data).unwrap()
    }

    #[test]
    fn test_forward_partial_pivoting() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let r = a.gauss_forward();
        // row [3, 4] is swapped to the top
        assert_eq!(r[(0, 0)], 3.0);
        assert_eq!(r[(0, 1)], 4.0);
        assert_eq!(r[(1, 0)], 0.0);
        assert!((r[(1, 1)] - 2.0 / 3.0).abs() < 1e-12);
        assert!(r.is_step_form());
    }

    #[test]
    fn test_forward_does_not_touch_source() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let _ = a.gauss_forward();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_forward_skips_zero_column() {
        // first column is all zero: pivot row 0 moves on to column 1
        let a = m(3, 3, &[0.0, 1.0, 2.0, 0.0, 2.0, 1.0, 0.0, 4.0, 4.0]);
        let r = a.gauss_forward();
        assert!(r.is_step_form());
        assert_eq!(r[(0, 1)], 4.0);
        assert_eq!(r[(1, 1)], 0.0);
        assert_eq!(r[(2, 1)], 0.0);
    }

    #[test]
    fn test_forward_wide_and_tall() {
        let wide = m(2, 4, &[1.0, 2.0, 3.0, 4.0, 2.0, 4.0, 7.0, 9.0]);
        assert!(wide.gauss_forward().is_step_form());
        let tall = m(4, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let r = tall.gauss_forward();
        assert!(r.is_step_form());
        assert!(r.row(2).unwrap().iter().all(|x| x.abs() < 1e-9));
    }

    #[test]
    fn test_back_reduces_above_pivots() {
        let a = m(3, 3, &[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 0.0, 0.0, 2.0]);
        let r = a.gauss_back().unwrap();
        assert_eq!(r, m(3, 3, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0]));
    }

    #[test]
    fn test_back_allows_zero_rows() {
        let a = m(3, 2, &[1.0, 2.0, 0.0, 0.0, 0.0, 3.0]);
        let r = a.gauss_back().unwrap();
        assert_eq!(r, m(3, 2, &[1.0, 0.0, 0.0, 0.0, 0.0, 3.0]));
    }

    #[test]
    fn test_back_rejects_non_step_form() {
        // leading columns not increasing
        let a = m(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(a.gauss_back().unwrap_err(), CoreError::NotStepForm { row: 1 });
        // two rows share a leading column
        let b = m(2, 2, &[1.0, 1.0, 1.0, 0.0]);
        assert!(matches!(b.gauss_back(), Err(CoreError::NotStepForm { .. })));
        assert!(!b.is_step_form());
    }

    #[test]
    fn test_back_all_zero() {
        let z = Matrix::<f64>::new(2, 3).unwrap();
        assert_eq!(z.gauss_back().unwrap(), z);
    }

    #[test]
    fn test_reduced_row_echelon() {
        let a = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let r = a.reduced_row_echelon();
        assert_eq!(r, m(2, 3, &[1.0, 0.0, -1.0, 0.0, 1.0, 2.0]));
    }

    #[test]
    fn test_rank() {
        assert_eq!(m(2, 2, &[1.0, 2.0, 2.0, 4.0]).rank(), 1);
        assert_eq!(m(2, 2, &[1.0, 2.0, 3.0, 4.0]).rank(), 2);
        assert_eq!(Matrix::<f64>::new(3, 3).unwrap().rank(), 0);
        assert_eq!(Matrix::<f64>::identity(4).unwrap().rank(), 4);
        assert_eq!(m(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).rank(), 2);
        assert_eq!(m(2, 4, &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0]).rank(), 2);
    }

    #[test]
    fn test_rank_ignores_sub_tolerance_noise() {
        let a = m(2, 2, &[1.0, 1.0, 1.0, 1.0 + 1e-12]);
        assert_eq!(a.rank(), 1);
    }

    #[test]
    fn test_rank_f32() {
        let a = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(a.rank(), 1);
    }
}
