//! Tolerance-based comparison for [`Matrix`].
//!
//! `==` treats two matrices as equal when they have the same shape and every
//! pair of corresponding elements differs by at most [`EPSILON`]. Elimination
//! introduces rounding, so exact comparison would reject correct results.
//! The [`approx`] traits are implemented too, for callers that want their
//! own tolerance.

use approx::{AbsDiffEq, RelativeEq};

use crate::Scalar;
use crate::dtype::EPSILON;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Compare against another matrix with an explicit absolute tolerance.
    ///
    /// When both element types are integers the difference is computed
    /// exactly in `i128`; otherwise both sides are widened to `f64`, so
    /// integers beyond 2^53 compared against a float lose precision.
    pub fn eq_within<U: Scalar>(&self, other: &Matrix<U>, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| elements_within(a, b, tolerance))
    }
}

fn elements_within<T: Scalar, U: Scalar>(a: T, b: U, tolerance: f64) -> bool {
    match (a.to_i128_exact(), b.to_i128_exact()) {
        (Some(x), Some(y)) => (x.abs_diff(y) as f64) <= tolerance,
        _ => (a.to_f64_lossy() - b.to_f64_lossy()).abs() <= tolerance,
    }
}

impl<T: Scalar, U: Scalar> PartialEq<Matrix<U>> for Matrix<T> {
    fn eq(&self, other: &Matrix<U>) -> bool {
        self.eq_within(other, EPSILON)
    }
}

impl<T> AbsDiffEq for Matrix<T>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
