//! Arithmetic for [`Matrix`].
//!
//! The named methods (`add_checked`, `sub_checked`, `matmul`, `scale`, ...)
//! return `Err` on incompatible shapes. The `std::ops` operators are thin
//! wrappers that panic instead, mirroring slice indexing:
//! - `Matrix op Matrix`: `+`, `-` element-wise, `*` matrix product
//! - `Matrix op T` and `T op Matrix`: broadcast `+`, `-`, `*` (and `Matrix / T`)
//! - `+=`, `-=`, `*=` mutate the left operand in place
//! - `Neg` for signed element types

use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

// ======================================================================
// Fallible (Result-returning) arithmetic
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// Element-wise addition, returning `Err` on shape mismatch.
    ///
    /// ```
    /// # use linmat_core::matrix;
    /// let a = matrix![[1.0, 0.0], [0.0, 1.0]].unwrap();
    /// let b = matrix![[2.0, 0.0], [0.0, 2.0]].unwrap();
    /// assert_eq!(a.add_checked(&b).unwrap(), matrix![[3.0, 0.0], [0.0, 3.0]].unwrap());
    /// ```
    pub fn add_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on shape mismatch.
    pub fn sub_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.columns() == other.rows()`; otherwise fails with
    /// [`CoreError::DimensionMismatch`] whose `expected` is the shape
    /// `other` would need to have (`self.columns()` rows, same columns).
    ///
    /// ```
    /// # use linmat_core::matrix;
    /// let a = matrix![[1, 2], [3, 4]].unwrap();
    /// let b = matrix![[5], [6]].unwrap();
    /// assert_eq!(a.matmul(&b).unwrap().as_slice(), &[17, 39]);
    /// ```
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.columns != other.rows {
            return Err(CoreError::DimensionMismatch {
                expected: (self.columns, other.columns),
                got: other.shape(),
            });
        }
        Ok(self.matmul_unchecked(other))
    }

    fn matmul_unchecked(&self, other: &Matrix<T>) -> Matrix<T> {
        let (m, k, n) = (self.rows, self.columns, other.columns);
        let mut data = vec![T::zero(); m * n];

        // ikj loop order keeps both `other` and the output row-contiguous
        for i in 0..m {
            let out_row = &mut data[i * n..(i + 1) * n];
            for p in 0..k {
                let a = self.data[i * k + p];
                let b_row = &other.data[p * n..(p + 1) * n];
                for (c, &b) in out_row.iter_mut().zip(b_row) {
                    *c = *c + a * b;
                }
            }
        }

        Matrix {
            data,
            rows: m,
            columns: n,
        }
    }

    /// Multiply every element by `x`.
    pub fn scale(&self, x: T) -> Matrix<T> {
        self.map(|a| a * x)
    }

    /// Add `x` to every element.
    pub fn add_scalar(&self, x: T) -> Matrix<T> {
        self.map(|a| a + x)
    }

    /// Subtract `x` from every element (`element - x`).
    pub fn sub_scalar(&self, x: T) -> Matrix<T> {
        self.map(|a| a - x)
    }

    /// Subtract every element from `x` (`x - element`).
    pub fn rsub_scalar(&self, x: T) -> Matrix<T> {
        self.map(|a| x - a)
    }

    /// In-place element-wise addition.
    pub fn add_assign_checked(&mut self, other: &Matrix<T>) -> Result<&mut Self> {
        self.check_same_shape(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a + b;
        }
        Ok(self)
    }

    /// In-place element-wise subtraction.
    pub fn sub_assign_checked(&mut self, other: &Matrix<T>) -> Result<&mut Self> {
        self.check_same_shape(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a - b;
        }
        Ok(self)
    }

    /// Replace `self` with the product `self * other`.
    ///
    /// On error `self` is left unchanged.
    pub fn mul_assign_checked(&mut self, other: &Matrix<T>) -> Result<&mut Self> {
        *self = self.matmul(other)?;
        Ok(self)
    }

    /// Multiply every element by `x` in place.
    pub fn scale_in_place(&mut self, x: T) -> &mut Self {
        self.apply(|a| a * x);
        self
    }
}

// ======================================================================
// Matrix + Matrix  (element-wise, same shape — panics on mismatch)
// ======================================================================

macro_rules! impl_matrix_elementwise {
    ($trait:ident, $method:ident) => {
        impl<T: Scalar> $trait for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                (&self).$method(rhs)
            }
        }

        impl<T: Scalar> $trait for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                assert_eq!(
                    self.shape(), rhs.shape(),
                    "dimension mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.shape(), rhs.shape(),
                );
                let data = self.data.iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a.$method(b))
                    .collect();
                Matrix {
                    data,
                    rows: self.rows,
                    columns: self.columns,
                }
            }
        }
    };
}

impl_matrix_elementwise!(Add, add);
impl_matrix_elementwise!(Sub, sub);

// ======================================================================
// Matrix * Matrix  (product — panics on mismatch)
// ======================================================================

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.columns, rhs.rows,
            "dimension mismatch in matrix product: {:?} * {:?}",
            self.shape(), rhs.shape(),
        );
        self.matmul_unchecked(rhs)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

// ======================================================================
// Matrix op scalar  (broadcast scalar to every element)
// ======================================================================

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(mut self, rhs: T) -> Matrix<T> {
                self.apply(|a| a $op rhs);
                self
            }
        }

        impl<T: Scalar> $trait<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: T) -> Matrix<T> {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, +);
impl_scalar_binop!(Sub, sub, -);
impl_scalar_binop!(Mul, mul, *);
impl_scalar_binop!(Div, div, /);

// ======================================================================
// scalar op Matrix  (only for concrete primitives: coherence forbids a
// blanket `impl<T> Add<Matrix<T>> for T`)
// ======================================================================

macro_rules! impl_scalar_lhs {
    ($($ty:ty),*) => {
        $(
            impl Add<Matrix<$ty>> for $ty {
                type Output = Matrix<$ty>;

                fn add(self, rhs: Matrix<$ty>) -> Matrix<$ty> {
                    rhs + self
                }
            }

            impl Add<&Matrix<$ty>> for $ty {
                type Output = Matrix<$ty>;

                fn add(self, rhs: &Matrix<$ty>) -> Matrix<$ty> {
                    rhs.add_scalar(self)
                }
            }

            impl Mul<Matrix<$ty>> for $ty {
                type Output = Matrix<$ty>;

                fn mul(self, rhs: Matrix<$ty>) -> Matrix<$ty> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$ty>> for $ty {
                type Output = Matrix<$ty>;

                fn mul(self, rhs: &Matrix<$ty>) -> Matrix<$ty> {
                    rhs.scale(self)
                }
            }

            impl Sub<Matrix<$ty>> for $ty {
                type Output = Matrix<$ty>;

                fn sub(self, mut rhs: Matrix<$ty>) -> Matrix<$ty> {
                    rhs.apply(|a| self - a);
                    rhs
                }
            }

            impl Sub<&Matrix<$ty>> for $ty {
                type Output = Matrix<$ty>;

                fn sub(self, rhs: &Matrix<$ty>) -> Matrix<$ty> {
                    rhs.rsub_scalar(self)
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ======================================================================
// Compound assignment
// ======================================================================

macro_rules! impl_matrix_assign {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $trait<&Matrix<T>> for Matrix<T> {
            fn $method(&mut self, rhs: &Matrix<T>) {
                if let Err(e) = self.$checked(rhs) {
                    panic!("{} failed: {e}", stringify!($method));
                }
            }
        }

        impl<T: Scalar> $trait for Matrix<T> {
            fn $method(&mut self, rhs: Matrix<T>) {
                <Self as $trait<&Matrix<T>>>::$method(self, &rhs);
            }
        }
    };
}

impl_matrix_assign!(AddAssign, add_assign, add_assign_checked);
impl_matrix_assign!(SubAssign, sub_assign, sub_assign_checked);
impl_matrix_assign!(MulAssign, mul_assign, mul_assign_checked);

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.scale_in_place(rhs);
    }
}

// ======================================================================
// Negation
// ======================================================================

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        self.apply(|a| -a);
        self
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|a| -a)
    }
}
