//! # linmat
//!
//! Dense generic matrices with Gaussian elimination, determinants, rank and
//! cofactor inverses.
//!
//! One `use linmat::prelude::*;` gives you [`Matrix`](core::Matrix), the
//! `matrix!` literal macro, the numeric traits and the `linalg` free
//! functions.
//!
//! ```
//! use linmat::prelude::*;
//!
//! let a = matrix![[2.0, 1.0], [1.0, 3.0]].unwrap();
//! assert_eq!(linalg::rank(&a), 2);
//! assert_eq!(a.invert().unwrap().invert().unwrap(), a);
//! ```

pub use linmat_core as core;
pub use linmat_core::matrix;

/// Glob-import convenience: `use linmat::prelude::*;`
pub mod prelude {
    pub use linmat_core::prelude::*;
}
