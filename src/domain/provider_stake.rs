//! Per-provider contribution record.

use core::fmt;

use super::{AssetPair, Balance};
use crate::error::AmmError;

/// How much of each asset a liquidity provider has contributed.
///
/// The stake is a **fee-distribution weight only**; it is not a claim that
/// can be withdrawn.  Its two balances carry the pool's asset names, and
/// grow with every deposit by the provider and every fee share paid to it.
///
/// # Examples
///
/// ```
/// use coinpair_amm::domain::{AssetPair, ProviderStake};
///
/// let pair = AssetPair::new("eth", "mtv").expect("distinct");
/// let mut stake = ProviderStake::empty("alice", &pair);
/// stake.contribute(10.0, 20.0);
/// assert_eq!(stake.stake_a().amount(), 10.0);
/// assert_eq!(stake.stake_of("mtv").map(|b| b.amount()), Ok(20.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProviderStake {
    provider_id: String,
    stake_a: Balance,
    stake_b: Balance,
}

impl ProviderStake {
    /// Creates a zero stake whose balances mirror `pair`.
    pub fn empty(provider_id: impl Into<String>, pair: &AssetPair) -> Self {
        Self {
            provider_id: provider_id.into(),
            stake_a: Balance::zero(pair.first()),
            stake_b: Balance::zero(pair.second()),
        }
    }

    /// Returns the provider identifier.
    #[must_use]
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    /// Returns the stake in asset A.
    #[must_use]
    pub const fn stake_a(&self) -> &Balance {
        &self.stake_a
    }

    /// Returns the stake in asset B.
    #[must_use]
    pub const fn stake_b(&self) -> &Balance {
        &self.stake_b
    }

    /// Returns the stake balance for the named asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownAsset`] if `asset` is neither stake name.
    pub fn stake_of(&self, asset: &str) -> Result<&Balance, AmmError> {
        if asset == self.stake_a.name() {
            Ok(&self.stake_a)
        } else if asset == self.stake_b.name() {
            Ok(&self.stake_b)
        } else {
            Err(AmmError::UnknownAsset(asset.to_string()))
        }
    }

    pub(crate) fn stake_of_mut(&mut self, asset: &str) -> Result<&mut Balance, AmmError> {
        if asset == self.stake_a.name() {
            Ok(&mut self.stake_a)
        } else if asset == self.stake_b.name() {
            Ok(&mut self.stake_b)
        } else {
            Err(AmmError::UnknownAsset(asset.to_string()))
        }
    }

    /// Records a two-sided contribution.
    pub fn contribute(&mut self, amount_a: f64, amount_b: f64) {
        self.stake_a.credit(amount_a);
        self.stake_b.credit(amount_b);
    }
}

impl fmt::Display for ProviderStake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.provider_id, self.stake_a, self.stake_b
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn pair() -> AssetPair {
        let Ok(pair) = AssetPair::new("A", "B") else {
            panic!("valid pair");
        };
        pair
    }

    #[test]
    fn empty_mirrors_pair_names() {
        let stake = ProviderStake::empty("p0", &pair());
        assert_eq!(stake.provider_id(), "p0");
        assert_eq!(stake.stake_a().name(), "A");
        assert_eq!(stake.stake_b().name(), "B");
        assert_eq!(stake.stake_a().amount(), 0.0);
        assert_eq!(stake.stake_b().amount(), 0.0);
    }

    #[test]
    fn contributions_accumulate() {
        let mut stake = ProviderStake::empty("p0", &pair());
        stake.contribute(500.0, 400.0);
        stake.contribute(100.0, 80.0);
        assert_eq!(stake.stake_a().amount(), 600.0);
        assert_eq!(stake.stake_b().amount(), 480.0);
    }

    #[test]
    fn stake_of_unknown_asset() {
        let stake = ProviderStake::empty("p0", &pair());
        assert_eq!(
            stake.stake_of("C"),
            Err(AmmError::UnknownAsset("C".to_string()))
        );
    }

    #[test]
    fn stake_of_mut_credits_named_asset() {
        let mut stake = ProviderStake::empty("p0", &pair());
        let Ok(b) = stake.stake_of_mut("B") else {
            panic!("expected Ok");
        };
        b.credit(3.0);
        assert_eq!(stake.stake_b().amount(), 3.0);
        assert_eq!(stake.stake_a().amount(), 0.0);
    }

    #[test]
    fn display() {
        let mut stake = ProviderStake::empty("p0", &pair());
        stake.contribute(1.0, 2.0);
        assert_eq!(stake.to_string(), "p0: 1 A / 2 B");
    }
}
