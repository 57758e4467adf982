//! `Display` formatting for [`Matrix`].
//!
//! Each row is wrapped in `|...|`, elements are tab-separated and floats are
//! printed with 3 fractional digits unless the formatter specifies a
//! precision (`{:.6}`). Meant for human inspection, not for parsing.

use core::fmt;

use crate::Scalar;

use super::Matrix;

const DEFAULT_PRECISION: usize = 3;

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }

        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for (c, v) in self.row_slice(r).iter().enumerate() {
                if c > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{v:.precision$}")?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}
