//! Relative tolerance for floating-point equality checks.

use core::fmt;

use crate::error::AmmError;

/// Relative epsilon used by the pool for invariant and ratio checks.
///
/// Two values `a` and `b` are considered equal when
///
/// ```text
/// |a − b| ≤ ε × max(|a|, |b|)
/// ```
///
/// Division followed by multiplication rarely reproduces the original
/// `f64` bit-for-bit, so the pool never compares products or ratios with
/// `==`.  The default is [`Tolerance::DEFAULT`] (`1e-9`).
///
/// # Examples
///
/// ```
/// use coinpair_amm::domain::Tolerance;
///
/// let tol = Tolerance::DEFAULT;
/// assert!(tol.approx_eq(1_000_000.0, 1_000_000.000_000_1));
/// assert!(!tol.approx_eq(1_000_000.0, 1_000_001.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Tolerance(f64);

impl Tolerance {
    /// Default relative epsilon: `1e-9`.
    pub const DEFAULT: Self = Self(1e-9);

    /// Exact comparison (`ε = 0`).
    pub const EXACT: Self = Self(0.0);

    /// Creates a new `Tolerance`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `epsilon` is negative,
    /// `NaN` or infinite.
    pub fn new(epsilon: f64) -> Result<Self, AmmError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(AmmError::InvalidConfiguration(
                "tolerance must be finite and non-negative",
            ));
        }
        Ok(Self(epsilon))
    }

    /// Returns the relative epsilon.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if `a` and `b` are equal within this tolerance.
    ///
    /// `NaN` is never equal to anything.
    #[must_use]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let scale = a.abs().max(b.abs());
        (a - b).abs() <= self.0 * scale
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = AmmError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(value: Tolerance) -> Self {
        value.0
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tolerance({:e})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_in_a_billion() {
        assert_eq!(Tolerance::default(), Tolerance::DEFAULT);
        assert!((Tolerance::DEFAULT.get() - 1e-9).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(Tolerance::new(-1e-9).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(f64::INFINITY).is_err());
        assert!(Tolerance::new(0.0).is_ok());
    }

    #[test]
    fn zero_values_are_equal() {
        assert!(Tolerance::EXACT.approx_eq(0.0, 0.0));
        assert!(Tolerance::DEFAULT.approx_eq(0.0, -0.0));
    }

    #[test]
    fn relative_not_absolute() {
        let tol = Tolerance::DEFAULT;
        // 1e-4 absolute difference on 1e6 is 1e-10 relative.
        assert!(tol.approx_eq(1e6, 1e6 + 1e-4));
        // The same absolute difference on 1.0 is far outside.
        assert!(!tol.approx_eq(1.0, 1.0 + 1e-4));
    }

    #[test]
    fn exact_rejects_rounding_drift() {
        let drift = 0.1 + 0.2;
        assert!(!Tolerance::EXACT.approx_eq(drift, 0.3));
        assert!(Tolerance::DEFAULT.approx_eq(drift, 0.3));
    }

    #[test]
    fn nan_never_equal() {
        assert!(!Tolerance::DEFAULT.approx_eq(f64::NAN, f64::NAN));
        assert!(!Tolerance::DEFAULT.approx_eq(f64::NAN, 1.0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Tolerance::DEFAULT), "Tolerance(1e-9)");
    }
}
