//! Arithmetic utilities for pool calculations.
//!
//! Pool quantities are IEEE 754 `f64` values.  [`CheckedArithmetic`]
//! turns non-finite intermediate results into errors, and
//! [`ensure_non_negative`] guards caller-supplied operands.  Approximate
//! equality lives in [`Tolerance`](crate::domain::Tolerance).

mod checked;

pub use checked::{ensure_non_negative, CheckedArithmetic};
