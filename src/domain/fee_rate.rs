//! Swap fee expressed as a fraction of the input amount.

use core::fmt;

use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// A swap fee rate in the half-open range `[0, 1)`.
///
/// The fee is deducted from the swap input before the pricing formula is
/// applied and is then shared among liquidity providers.
///
/// # Examples
///
/// ```
/// use coinpair_amm::domain::FeeRate;
///
/// let rate = FeeRate::new(0.003).expect("valid rate");
/// assert_eq!(rate.apply_to(1_000.0), Ok(3.0));
/// assert!(FeeRate::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct FeeRate(f64);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(0.0);

    /// 0.30%: the conventional constant-product fee.
    pub const STANDARD: Self = Self(0.003);

    /// Creates a new `FeeRate`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] unless `rate` is finite
    /// and within `[0, 1)`.
    pub fn new(rate: f64) -> Result<Self, AmmError> {
        if !rate.is_finite() || !(0.0..1.0).contains(&rate) {
            return Err(AmmError::InvalidConfiguration(
                "fee rate must be within [0, 1)",
            ));
        }
        Ok(Self(rate))
    }

    /// Returns the fee fraction.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Computes `rate × amount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product is not finite.
    pub fn apply_to(&self, amount: f64) -> Result<f64, AmmError> {
        self.0.safe_mul(&amount)
    }
}

impl TryFrom<f64> for FeeRate {
    type Error = AmmError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeeRate> for f64 {
    fn from(value: FeeRate) -> Self {
        value.0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 * 100.0)
    }
}
