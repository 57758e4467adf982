//! `linmat-core` — dense generic matrices and elimination-based algorithms.
//!
//! Provides the [`Matrix`] container, numeric type traits, arithmetic,
//! shape operations, Gaussian elimination, determinant, rank and the
//! cofactor (adjugate) inverse.
//!
//! # Design
//!
//! - Storage is a single row-major `Vec<T>` owned by the matrix.
//! - Generic over numeric types via [`Scalar`] / [`Float`]; element-type
//!   conversion is always explicit ([`Matrix::convert`], [`Matrix::cast`]).
//! - Every fallible operation returns [`Result`]; elimination works on a
//!   copy, so a failed call never leaves a matrix half-modified.
//! - Values within [`EPSILON`] of zero are treated as zero.
//!
//! ```
//! use linmat_core::prelude::*;
//!
//! let a = matrix![[1.0_f64, 2.0], [3.0, 4.0]].unwrap();
//! assert!((a.det().unwrap() + 2.0).abs() < 1e-12);
//! assert_eq!(a.trace().unwrap(), 5.0);
//! assert_eq!(&a * &a.invert().unwrap(), Matrix::<f64>::identity(2).unwrap());
//! ```

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use dtype::{EPSILON, Float, Scalar};
pub use error::{CoreError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use linmat_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{EPSILON, Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg;
    pub use crate::matrix;
    pub use crate::matrix::Matrix;
}
