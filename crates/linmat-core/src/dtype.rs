//! Numeric type hierarchy for generic matrices.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar            (every primitive integer and float)
//!   └── Float       (f32, f64)
//! ```
//!
//! Storage, arithmetic and shape operations only need [`Scalar`]. Anything
//! that divides by a pivot or compares against [`EPSILON`] (elimination,
//! determinant, rank, inverse, norm) requires [`Float`].

use core::fmt;

use num_traits::{Num, NumCast};

/// Absolute tolerance below which a value is treated as numerically zero.
///
/// Used by matrix equality, pivot selection, step-form detection, rank
/// counting and singularity detection.
pub const EPSILON: f64 = 1e-8;

// ---------------------------------------------------------------------------
// Scalar — the root trait for every numeric element type
// ---------------------------------------------------------------------------

/// Base trait for all numeric types storable in a [`Matrix`](crate::Matrix).
///
/// This intentionally does *not* require floating-point operations so that
/// integer matrices remain first-class citizens.
pub trait Scalar:
    Num + NumCast + Copy + PartialOrd + fmt::Debug + fmt::Display + Default + Send + Sync + 'static
{
    /// Widen to `f64` for tolerance comparisons. Values with no `f64`
    /// representation map to NaN and therefore never compare equal.
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// `true` for integer types, detected by truncating division (`1 / 2 == 0`).
    #[inline]
    fn is_integral() -> bool {
        Self::one() / (Self::one() + Self::one()) == Self::zero()
    }

    /// Exact `i128` value for integer types; `None` for floats and for
    /// integers outside the `i128` range.
    #[inline]
    fn to_i128_exact(self) -> Option<i128> {
        if Self::is_integral() {
            self.to_i128()
        } else {
            None
        }
    }
}

impl<T> Scalar for T where
    T: Num
        + NumCast
        + Copy
        + PartialOrd
        + fmt::Debug
        + fmt::Display
        + Default
        + Send
        + Sync
        + 'static
{
}

// ---------------------------------------------------------------------------
// Float — adds operations that only make sense for floating-point numbers
// ---------------------------------------------------------------------------

/// Trait for floating-point scalar types (`f32`, `f64`).
pub trait Float: Scalar + num_traits::Float {
    /// [`EPSILON`] expressed in `Self`.
    #[inline]
    fn tolerance() -> Self {
        <Self as NumCast>::from(EPSILON).unwrap_or_else(<Self as num_traits::Float>::epsilon)
    }

    /// `true` when `|self|` is below [`tolerance`](Float::tolerance).
    #[inline]
    fn is_negligible(self) -> bool {
        num_traits::Float::abs(self) < Self::tolerance()
    }
}

impl<T> Float for T where T: Scalar + num_traits::Float {}
