//! Liquidity provision trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds ratio-preserving deposits, the paired-amount
//! query that helps callers build such deposits, and read access to the
//! per-provider stake records that weight fee distribution.
//!
//! # Ratio Invariant
//!
//! A deposit is accepted only if its two amounts are in the pool's current
//! ratio, so `asset_a / asset_b` is unchanged by
//! [`LiquidityPool::add_liquidity`].  The invariant product is recomputed
//! afterwards.
//!
//! There is no removal operation: a stake is a fee weight, not a claim.

use super::SwapPool;
use crate::domain::ProviderStake;
use crate::error::AmmError;

/// Trait for pools that accept liquidity and share fees with providers.
pub trait LiquidityPool: SwapPool {
    /// Deposits `amount_a` and `amount_b` on behalf of `provider_id`.
    ///
    /// Creates the provider's stake record on first deposit.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if either amount is negative or not
    ///   finite, or both are zero.
    /// - [`AmmError::InvalidRatio`] if `amount_a / amount_b` differs from
    ///   the pool ratio beyond tolerance.
    fn add_liquidity(
        &mut self,
        amount_a: f64,
        amount_b: f64,
        provider_id: &str,
    ) -> Result<(), AmmError>;

    /// Returns the amount of the other asset that must accompany `amount`
    /// of `asset` to preserve the current ratio.  Side-effect free.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if `asset` is not in the pool.
    /// - [`AmmError::InvalidAmount`] if `amount` is negative or not finite.
    fn paired_amount(&self, asset: &str, amount: f64) -> Result<f64, AmmError>;

    /// Looks up a provider's stake record.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ProviderNotFound`] if the provider never
    /// supplied liquidity.
    fn provider(&self, provider_id: &str) -> Result<&ProviderStake, AmmError>;

    /// Sum of all providers' stake in `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownAsset`] if `asset` is not in the pool.
    fn total_stake(&self, asset: &str) -> Result<f64, AmmError>;
}
