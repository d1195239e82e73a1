//! Outcome of a swap operation.

use core::fmt;

use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// What a successful swap took in, charged, and paid out.
///
/// # Invariants
///
/// - `fee + net_input == amount_in` (up to `f64` rounding).
/// - `fee` is the amount shared among providers of the input asset.
///
/// # Examples
///
/// ```
/// use coinpair_amm::domain::SwapOutcome;
///
/// let outcome = SwapOutcome::new(100.0, 0.3, 90.66);
/// assert!((outcome.net_input() - 99.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOutcome {
    amount_in: f64,
    fee: f64,
    amount_out: f64,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome`.
    pub const fn new(amount_in: f64, fee: f64, amount_out: f64) -> Self {
        Self {
            amount_in,
            fee,
            amount_out,
        }
    }

    /// Returns the gross input, fee included.
    #[must_use]
    pub const fn amount_in(&self) -> f64 {
        self.amount_in
    }

    /// Returns the fee deducted from the input.
    #[must_use]
    pub const fn fee(&self) -> f64 {
        self.fee
    }

    /// Returns the input that entered the pool's reserve.
    #[must_use]
    pub fn net_input(&self) -> f64 {
        self.amount_in - self.fee
    }

    /// Returns the amount of the output asset delivered to the caller.
    #[must_use]
    pub const fn amount_out(&self) -> f64 {
        self.amount_out
    }

    /// Realized price as `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] for a zero-input swap.
    pub fn effective_price(&self) -> Result<f64, AmmError> {
        self.amount_out.safe_div(&self.amount_in)
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap(in={}, fee={}, out={})",
            self.amount_in, self.fee, self.amount_out
        )
    }
}
