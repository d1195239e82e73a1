//! Configuration for a coin-pair pool.

use crate::domain::{AssetPair, FeeRate, Tolerance};
use crate::error::AmmError;

/// Blueprint for a constant-product coin-pair pool.
///
/// Describes the immutable parameters of a pool and its bootstrap deposit:
/// asset pair, initial amounts, fee rate, the identity credited with the
/// bootstrap liquidity, and the tolerance used for equality checks.
///
/// # Derived Values
///
/// - Initial invariant: `k = amount_a × amount_b`
/// - Initial price (asset A in terms of asset B): `P₀ = amount_b / amount_a`
///
/// # Validation
///
/// - Both initial amounts must be finite and strictly positive.
/// - The bootstrap provider identifier must be non-empty.
/// - Pair, fee rate and tolerance are validated by their own types.
///
/// With the `serde` feature the config can be loaded from JSON:
///
/// ```json
/// { "pair": { "first": "eth", "second": "mtv" }, "amount_a": 1000.0,
///   "amount_b": 1000.0, "fee_rate": 0.003, "bootstrap_provider": "p0",
///   "tolerance": 1e-9 }
/// ```
///
/// A deserialized config has bypassed [`new`](Self::new); pools built via
/// [`FromConfig`](crate::traits::FromConfig) call [`validate`](Self::validate)
/// again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    pair: AssetPair,
    amount_a: f64,
    amount_b: f64,
    fee_rate: FeeRate,
    bootstrap_provider: String,
    #[cfg_attr(feature = "serde", serde(default))]
    tolerance: Tolerance,
}

impl PoolConfig {
    /// Creates a new `PoolConfig` with [`Tolerance::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out
    /// of range.
    pub fn new(
        pair: AssetPair,
        amount_a: f64,
        amount_b: f64,
        fee_rate: FeeRate,
        bootstrap_provider: impl Into<String>,
    ) -> Result<Self, AmmError> {
        let config = Self {
            pair,
            amount_a,
            amount_b,
            fee_rate,
            bootstrap_provider: bootstrap_provider.into(),
            tolerance: Tolerance::DEFAULT,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from a compound pair name and a raw fee fraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the name does not split
    /// into two assets, the fee rate is outside `[0, 1)`, or any other
    /// parameter is invalid.
    pub fn from_parts(
        pair_name: &str,
        amount_a: f64,
        amount_b: f64,
        fee_rate: f64,
        bootstrap_provider: impl Into<String>,
    ) -> Result<Self, AmmError> {
        Self::new(
            AssetPair::parse(pair_name)?,
            amount_a,
            amount_b,
            FeeRate::new(fee_rate)?,
            bootstrap_provider,
        )
    }

    /// Replaces the comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on the first violation.
    pub fn validate(&self) -> Result<(), AmmError> {
        // Re-run the component checks: a deserialized config skipped them.
        AssetPair::new(self.pair.first(), self.pair.second())?;
        FeeRate::new(self.fee_rate.get())?;
        Tolerance::new(self.tolerance.get())?;

        if !self.amount_a.is_finite() || self.amount_a <= 0.0 {
            return Err(AmmError::InvalidConfiguration(
                "initial amount of asset A must be positive",
            ));
        }
        if !self.amount_b.is_finite() || self.amount_b <= 0.0 {
            return Err(AmmError::InvalidConfiguration(
                "initial amount of asset B must be positive",
            ));
        }
        if !(self.amount_a * self.amount_b).is_finite() {
            return Err(AmmError::InvalidConfiguration(
                "initial invariant product is not finite",
            ));
        }
        if self.bootstrap_provider.is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "bootstrap provider must be named",
            ));
        }
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the initial amount of asset A.
    #[must_use]
    pub const fn amount_a(&self) -> f64 {
        self.amount_a
    }

    /// Returns the initial amount of asset B.
    #[must_use]
    pub const fn amount_b(&self) -> f64 {
        self.amount_b
    }

    /// Returns the swap fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Returns the provider credited with the bootstrap deposit.
    #[must_use]
    pub fn bootstrap_provider(&self) -> &str {
        &self.bootstrap_provider
    }

    /// Returns the comparison tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> Tolerance {
        self.tolerance
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
    fn valid_config() {
        let result = PoolConfig::new(pair(), 1_000.0, 2_000.0, FeeRate::STANDARD, "p0");
        assert!(result.is_ok());
    }

    #[test]
    fn from_parts_parses_pair_name() {
        let Ok(cfg) = PoolConfig::from_parts("eth-mtv", 1.0, 2.0, 0.003, "p0") else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.pair().first(), "eth");
        assert_eq!(cfg.pair().second(), "mtv");
    }

    #[test]
    fn from_parts_rejects_bad_name() {
        let result = PoolConfig::from_parts("ethmtv", 1.0, 2.0, 0.003, "p0");
        assert!(matches!(result, Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn from_parts_rejects_bad_fee() {
        let result = PoolConfig::from_parts("eth-mtv", 1.0, 2.0, 1.5, "p0");
        assert!(matches!(result, Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn zero_amount_rejected() {
        assert!(PoolConfig::new(pair(), 0.0, 1_000.0, FeeRate::ZERO, "p0").is_err());
        assert!(PoolConfig::new(pair(), 1_000.0, 0.0, FeeRate::ZERO, "p0").is_err());
    }

    #[test]
    fn negative_and_non_finite_amounts_rejected() {
        assert!(PoolConfig::new(pair(), -1.0, 1.0, FeeRate::ZERO, "p0").is_err());
        assert!(PoolConfig::new(pair(), f64::NAN, 1.0, FeeRate::ZERO, "p0").is_err());
        assert!(PoolConfig::new(pair(), 1.0, f64::INFINITY, FeeRate::ZERO, "p0").is_err());
    }

    #[test]
    fn overflowing_product_rejected() {
        assert!(PoolConfig::new(pair(), f64::MAX, 2.0, FeeRate::ZERO, "p0").is_err());
    }

    #[test]
    fn empty_bootstrap_provider_rejected() {
        assert!(PoolConfig::new(pair(), 1.0, 1.0, FeeRate::ZERO, "").is_err());
    }

    #[test]
    fn accessors_and_tolerance_override() {
        let Ok(cfg) = PoolConfig::new(pair(), 100.0, 200.0, FeeRate::STANDARD, "p0") else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.amount_a(), 100.0);
        assert_eq!(cfg.amount_b(), 200.0);
        assert_eq!(cfg.fee_rate(), FeeRate::STANDARD);
        assert_eq!(cfg.bootstrap_provider(), "p0");
        assert_eq!(cfg.tolerance(), Tolerance::DEFAULT);

        let cfg = cfg.with_tolerance(Tolerance::EXACT);
        assert_eq!(cfg.tolerance(), Tolerance::EXACT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "pair": { "first": "eth", "second": "mtv" },
            "amount_a": 1000.0,
            "amount_b": 500.0,
            "fee_rate": 0.003,
            "bootstrap_provider": "p0"
        }"#;
        let Ok(cfg) = serde_json::from_str::<PoolConfig>(json) else {
            panic!("expected valid JSON config");
        };
        assert_eq!(cfg.pair().first(), "eth");
        assert_eq!(cfg.amount_b(), 500.0);
        assert_eq!(cfg.tolerance(), Tolerance::DEFAULT);
        assert!(cfg.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_with_out_of_range_fee_is_rejected() {
        let json = r#"{
            "pair": { "first": "eth", "second": "mtv" },
            "amount_a": 1000.0,
            "amount_b": 500.0,
            "fee_rate": 1.0,
            "bootstrap_provider": "p0"
        }"#;
        assert!(serde_json::from_str::<PoolConfig>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_with_identical_assets_fails_validation() {
        let json = r#"{
            "pair": { "first": "eth", "second": "eth" },
            "amount_a": 1.0,
            "amount_b": 1.0,
            "fee_rate": 0.0,
            "bootstrap_provider": "p0"
        }"#;
        let Ok(cfg) = serde_json::from_str::<PoolConfig>(json) else {
            panic!("structurally valid JSON");
        };
        assert!(matches!(
            cfg.validate(),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }
}
