//! Checked `f64` arithmetic.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<f64, AmmError>`](crate::error::AmmError) instead of
//! silently producing `NaN` or `±∞`.
//!
//! # Examples
//!
//! ```
//! use coinpair_amm::math::CheckedArithmetic;
//!
//! let sum = 100.0_f64.safe_add(&200.0);
//! assert_eq!(sum, Ok(300.0));
//! assert!(1.0_f64.safe_div(&0.0).is_err());
//! ```

use crate::error::AmmError;

/// Fallible arithmetic over floating-point pool quantities.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - A result that is not finite is an error; it is never clamped.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not finite.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not finite.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not finite.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked division.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero and
    /// [`AmmError::Overflow`] if the quotient is not finite.
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError>;
}

#[inline]
fn finite(value: f64, context: &'static str) -> Result<f64, AmmError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AmmError::Overflow(context))
    }
}

impl CheckedArithmetic for f64 {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        finite(self + other, "float addition overflow")
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        finite(self - other, "float subtraction overflow")
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        finite(self * other, "float multiplication overflow")
    }

    fn safe_div(&self, other: &Self) -> Result<Self, AmmError> {
        if *other == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        finite(self / other, "float division overflow")
    }
}

/// Rejects negative, `NaN` and infinite operands.
///
/// # Errors
///
/// Returns [`AmmError::InvalidAmount`] with `context` when `value` is not a
/// finite, non-negative number.
pub fn ensure_non_negative(value: f64, context: &'static str) -> Result<f64, AmmError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AmmError::InvalidAmount(context))
    }
}
