//! Core swap trait for executing swaps and querying pool state.
//!
//! [`SwapPool`] covers the exchange side of a two-asset pool:
//!
//! 1. **Execute**: [`SwapPool::swap`] performs the exchange.
//! 2. **Quote**: [`SwapPool::spot_price`] returns the current exchange rate.
//! 3. **Inspect pair**: [`SwapPool::asset_pair`].
//! 4. **Inspect fees**: [`SwapPool::fee_rate`].
//!
//! # Fee Deduction Invariant
//!
//! Implementations deduct the fee from the input amount before applying
//! the pricing formula:
//!
//! ```text
//! fee        = amount_in × fee_rate
//! net_input  = amount_in − fee
//! amount_out = price_curve(net_input)
//! ```

use crate::domain::{AssetPair, FeeRate, SwapOutcome};
use crate::error::AmmError;

/// Exchange operations of a two-asset pool.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common variants:
///
/// - [`AmmError::UnknownAsset`]: an asset name is not part of the pool
/// - [`AmmError::InsufficientLiquidity`]: the input exceeds the source balance
/// - [`AmmError::InvariantViolation`]: the product check failed and the
///   swap was rolled back
pub trait SwapPool {
    /// Exchanges `amount_in` of `from` for the implied amount of `to`.
    ///
    /// The swap is atomic: on any error the pool is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if either name is not in the pool.
    /// - [`AmmError::SameAsset`] if `from == to`.
    /// - [`AmmError::InvalidAmount`] if `amount_in` is negative or not finite.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_in` exceeds the
    ///   `from` balance.
    /// - [`AmmError::NoStakeholders`] if nobody holds stake in `from`.
    /// - [`AmmError::InvariantViolation`] if the post-swap product check
    ///   fails.
    fn swap(&mut self, from: &str, to: &str, amount_in: f64) -> Result<SwapOutcome, AmmError>;

    /// Returns units of `quote` per unit of `base` at the current balances.
    ///
    /// Returns `1.0` when `base == quote`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if either name is not in the pool.
    /// - [`AmmError::DivisionByZero`] if the base balance is zero.
    fn spot_price(&self, base: &str, quote: &str) -> Result<f64, AmmError>;

    /// Returns the pool's asset pair.  Fixed for the lifetime of the pool.
    #[must_use]
    fn asset_pair(&self) -> &AssetPair;

    /// Returns the fee rate applied to swaps.
    #[must_use]
    fn fee_rate(&self) -> FeeRate;
}
