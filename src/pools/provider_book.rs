//! Provider stake ledger and proportional fee distribution.
//!
//! The book is owned by exactly one pool.  Fee distribution is split in two
//! phases so the pool can fail a swap before touching any balance:
//!
//! 1. [`ProviderBook::plan_distribution`] computes every provider's share
//!    (read-only, may fail with [`AmmError::NoStakeholders`]).
//! 2. [`ProviderBook::apply_distribution`] credits the planned shares.
//!
//! # Share Formula
//!
//! ```text
//! total  = Σ stake[p][asset]
//! share  = stake[p][asset] / total × fee
//! ```

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::{AssetPair, ProviderStake};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Per-provider fee shares computed by [`ProviderBook::plan_distribution`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeeDistribution {
    asset: String,
    fee: f64,
    shares: Vec<(String, f64)>,
}

impl FeeDistribution {
    /// Returns the asset the fee is paid in.
    #[must_use]
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// Returns the fee being distributed.
    #[must_use]
    pub const fn fee(&self) -> f64 {
        self.fee
    }

    /// Returns `(provider_id, share)` pairs in provider-id order.
    #[must_use]
    pub fn shares(&self) -> &[(String, f64)] {
        &self.shares
    }

    /// Sum of all shares; equals [`fee`](Self::fee) up to rounding.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.shares.iter().map(|(_, share)| share).sum()
    }
}

/// Stake records keyed by provider id.
///
/// Records are created lazily and never removed.  Iteration order is the
/// lexical order of provider ids, which keeps fee distribution
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderBook {
    stakes: BTreeMap<String, ProviderStake>,
}

impl ProviderBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stakes.len()
    }

    /// Returns `true` if no provider is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }

    /// Returns a provider's stake, if registered.
    #[must_use]
    pub fn get(&self, provider_id: &str) -> Option<&ProviderStake> {
        self.stakes.get(provider_id)
    }

    /// Iterates over all stake records in provider-id order.
    pub fn iter(&self) -> impl Iterator<Item = &ProviderStake> {
        self.stakes.values()
    }

    /// Credits a contribution to `provider_id`, creating a zero record
    /// mirroring `pair` if the provider is new.
    pub fn contribute(&mut self, pair: &AssetPair, provider_id: &str, amount_a: f64, amount_b: f64) {
        self.stakes
            .entry(provider_id.to_string())
            .or_insert_with(|| ProviderStake::empty(provider_id, pair))
            .contribute(amount_a, amount_b);
    }

    /// Sum of all providers' stake in `asset`.
    ///
    /// An empty book has zero stake in every asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownAsset`] if a record has no stake named
    /// `asset`, and [`AmmError::Overflow`] if the sum is not finite.
    pub fn total_stake(&self, asset: &str) -> Result<f64, AmmError> {
        self.stakes
            .values()
            .try_fold(0.0_f64, |acc, stake| -> Result<f64, AmmError> {
                acc.safe_add(&stake.stake_of(asset)?.amount())
            })
    }

    /// Computes each provider's share of `fee` in `asset`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if `asset` is not a stake name.
    /// - [`AmmError::NoStakeholders`] if the total stake in `asset` is zero.
    /// - [`AmmError::Overflow`] if a share is not finite.
    pub fn plan_distribution(&self, asset: &str, fee: f64) -> Result<FeeDistribution, AmmError> {
        let total = self.total_stake(asset)?;
        if total <= 0.0 {
            return Err(AmmError::NoStakeholders);
        }

        let shares = self
            .stakes
            .iter()
            .map(|(id, stake)| -> Result<(String, f64), AmmError> {
                let weight = stake.stake_of(asset)?.amount().safe_div(&total)?;
                Ok((id.clone(), weight.safe_mul(&fee)?))
            })
            .collect::<Result<Vec<_>, AmmError>>()?;

        Ok(FeeDistribution {
            asset: asset.to_string(),
            fee,
            shares,
        })
    }

    /// Credits every planned share to its provider's stake.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ProviderNotFound`] if the plan names a provider
    /// that is not in this book.  Shares are checked before any credit.
    pub fn apply_distribution(&mut self, plan: &FeeDistribution) -> Result<(), AmmError> {
        if let Some((missing, _)) = plan
            .shares
            .iter()
            .find(|(id, _)| !self.stakes.contains_key(id))
        {
            return Err(AmmError::ProviderNotFound(missing.clone()));
        }

        for (id, share) in &plan.shares {
            if let Some(stake) = self.stakes.get_mut(id) {
                stake.stake_of_mut(&plan.asset)?.credit(*share);
                trace!(provider = %id, asset = %plan.asset, share, "fee share credited");
            }
        }
        Ok(())
    }

    /// Plans and applies a distribution in one step.
    ///
    /// # Errors
    ///
    /// See [`plan_distribution`](Self::plan_distribution).
    pub fn distribute_fee(&mut self, asset: &str, fee: f64) -> Result<FeeDistribution, AmmError> {
        let plan = self.plan_distribution(asset, fee)?;
        self.apply_distribution(&plan)?;
        Ok(plan)
    }
}
