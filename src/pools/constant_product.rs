//! Constant Product coin-pair pool with provider fee sharing.
//!
//! The swap invariant is `a × b = k` where `a` and `b` are the balances of
//! the two assets.  Fees are deducted from the input amount **before** the
//! pricing formula is applied and are paid out to providers of the input
//! asset instead of staying in the pool.
//!
//! # Swap Algorithm (asset X → asset Y)
//!
//! 1. `fee = amount_in × fee_rate`
//! 2. `net_input = amount_in − fee`
//! 3. `new_x = x + net_input`
//! 4. `new_y = k / new_x`
//! 5. `amount_out = y − new_y`
//! 6. `x += net_input`, `y −= amount_out`
//! 7. verify `x × y ≈ k`, otherwise restore `x` and `y` and fail
//! 8. share `fee` among providers in proportion to their stake in X
//!
//! # Invariant
//!
//! After every swap `a × b` equals `k` within the pool's [`Tolerance`].
//! `k` changes only when liquidity is added, where it is recomputed from
//! the new balances.

use tracing::{debug, warn};

use super::provider_book::{FeeDistribution, ProviderBook};
use crate::config::PoolConfig;
use crate::domain::{AssetPair, Balance, FeeRate, ProviderStake, SwapOutcome, Tolerance};
use crate::error::AmmError;
use crate::math::{ensure_non_negative, CheckedArithmetic};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// Which of the pool's two balances an asset name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    A,
    B,
}

/// A two-asset Constant Product pool (`a · b = k`).
///
/// Created from a [`PoolConfig`] via [`FromConfig`], or positionally via
/// [`create`](Self::create).  The bootstrap provider is registered with a
/// stake equal to the initial deposit.
///
/// # State
///
/// - `asset_a` / `asset_b`: current balances
/// - `invariant_product`: `k`, the product at the last point of consistency
/// - `providers`: stake records that weight fee distribution
/// - `accumulated_fees_a` / `accumulated_fees_b`: lifetime fees paid out
///
/// # Concurrency
///
/// Mutating operations take `&mut self`.  A multi-threaded host must
/// serialize access to one pool, e.g. behind a `Mutex`.
///
/// # Example
///
/// ```rust
/// use coinpair_amm::pools::ConstantProductPool;
/// use coinpair_amm::traits::{LiquidityPool, SwapPool};
///
/// let mut pool = ConstantProductPool::create("A-B", 1_000.0, 1_000.0, 0.003, "p0")
///     .expect("pool created");
///
/// let outcome = pool.swap("A", "B", 100.0).expect("swap ok");
/// assert!(outcome.amount_out() > 90.0);
///
/// let stake = pool.provider("p0").expect("bootstrap provider");
/// assert!((stake.stake_a().amount() - 1_000.3).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantProductPool {
    pair: AssetPair,
    asset_a: Balance,
    asset_b: Balance,
    invariant_product: f64,
    fee_rate: FeeRate,
    tolerance: Tolerance,
    providers: ProviderBook,
    accumulated_fees_a: f64,
    accumulated_fees_b: f64,
}

impl ConstantProductPool {
    /// Creates a pool from a compound pair name such as `"eth-mtv"`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the name does not split
    /// into two distinct non-empty assets, either amount is not positive,
    /// or `fee_rate` is outside `[0, 1)`.
    pub fn create(
        pair_name: &str,
        amount_a: f64,
        amount_b: f64,
        fee_rate: f64,
        bootstrap_provider: &str,
    ) -> Result<Self, AmmError> {
        let config =
            PoolConfig::from_parts(pair_name, amount_a, amount_b, fee_rate, bootstrap_provider)?;
        Self::from_config(&config)
    }

    /// Returns the balance of asset A.
    #[must_use]
    pub const fn asset_a(&self) -> &Balance {
        &self.asset_a
    }

    /// Returns the balance of asset B.
    #[must_use]
    pub const fn asset_b(&self) -> &Balance {
        &self.asset_b
    }

    /// Returns the balance of the named asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownAsset`] if `asset` is not in the pool.
    pub fn balance(&self, asset: &str) -> Result<&Balance, AmmError> {
        Ok(self.balance_of(self.side_of(asset)?))
    }

    /// Returns the invariant product `k`.
    #[must_use]
    pub const fn invariant_product(&self) -> f64 {
        self.invariant_product
    }

    /// Returns the tolerance used for invariant and ratio checks.
    #[must_use]
    pub const fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Returns the provider stake ledger.
    #[must_use]
    pub const fn providers(&self) -> &ProviderBook {
        &self.providers
    }

    /// Returns the lifetime fees paid to providers in the named asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownAsset`] if `asset` is not in the pool.
    pub fn accumulated_fees(&self, asset: &str) -> Result<f64, AmmError> {
        Ok(match self.side_of(asset)? {
            Side::A => self.accumulated_fees_a,
            Side::B => self.accumulated_fees_b,
        })
    }

    fn side_of(&self, asset: &str) -> Result<Side, AmmError> {
        if asset == self.asset_a.name() {
            Ok(Side::A)
        } else if asset == self.asset_b.name() {
            Ok(Side::B)
        } else {
            Err(AmmError::UnknownAsset(asset.to_string()))
        }
    }

    const fn balance_of(&self, side: Side) -> &Balance {
        match side {
            Side::A => &self.asset_a,
            Side::B => &self.asset_b,
        }
    }

    fn balance_of_mut(&mut self, side: Side) -> &mut Balance {
        match side {
            Side::A => &mut self.asset_a,
            Side::B => &mut self.asset_b,
        }
    }

    /// Compares the current balance product with `k`.
    fn check_invariant(&self) -> Result<(), AmmError> {
        let product = self.asset_a.amount() * self.asset_b.amount();
        if self.tolerance.approx_eq(product, self.invariant_product) {
            Ok(())
        } else {
            Err(AmmError::InvariantViolation)
        }
    }

    /// Restores both balances to a snapshot taken before a swap.
    fn restore(&mut self, snapshot: (f64, f64)) {
        self.asset_a.restore(snapshot.0);
        self.asset_b.restore(snapshot.1);
    }

    fn record_fee(&mut self, side: Side, fee: f64) {
        match side {
            Side::A => self.accumulated_fees_a += fee,
            Side::B => self.accumulated_fees_b += fee,
        }
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates a new pool from the given configuration.
    ///
    /// The initial invariant is `amount_a × amount_b` and the bootstrap
    /// provider's stake equals the initial deposit.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;

        let pair = config.pair().clone();
        let amount_a = config.amount_a();
        let amount_b = config.amount_b();

        let mut providers = ProviderBook::new();
        providers.contribute(&pair, config.bootstrap_provider(), amount_a, amount_b);

        let pool = Self {
            asset_a: Balance::new(pair.first(), amount_a),
            asset_b: Balance::new(pair.second(), amount_b),
            invariant_product: amount_a.safe_mul(&amount_b)?,
            fee_rate: config.fee_rate(),
            tolerance: config.tolerance(),
            providers,
            accumulated_fees_a: 0.0,
            accumulated_fees_b: 0.0,
            pair,
        };

        debug!(
            pair = %pool.pair,
            amount_a,
            amount_b,
            k = pool.invariant_product,
            fee_rate = pool.fee_rate.get(),
            bootstrap = config.bootstrap_provider(),
            "pool created"
        );
        Ok(pool)
    }
}

impl SwapPool for ConstantProductPool {
    /// Executes a swap on the constant product pool.
    ///
    /// All checks that do not depend on the mutation (asset names, input
    /// sufficiency, fee plan) run first.  The only post-mutation failure is
    /// the invariant check, which restores both balances bit-for-bit from a
    /// snapshot before returning.
    ///
    /// A zero fee skips distribution, so a fee-free pool never reports
    /// [`AmmError::NoStakeholders`].
    fn swap(&mut self, from: &str, to: &str, amount_in: f64) -> Result<SwapOutcome, AmmError> {
        let from_side = self.side_of(from)?;
        let to_side = self.side_of(to)?;
        if from_side == to_side {
            return Err(AmmError::SameAsset);
        }
        ensure_non_negative(amount_in, "swap input must be finite and non-negative")?;

        let from_amount = self.balance_of(from_side).amount();
        let to_amount = self.balance_of(to_side).amount();
        if amount_in > from_amount {
            return Err(AmmError::InsufficientLiquidity);
        }

        let fee = self.fee_rate.apply_to(amount_in)?;
        let net_input = amount_in.safe_sub(&fee)?;
        let new_from = from_amount.safe_add(&net_input)?;
        let new_to = self.invariant_product.safe_div(&new_from)?;
        let amount_out = to_amount.safe_sub(&new_to)?;

        let plan: Option<FeeDistribution> = if fee > 0.0 {
            Some(self.providers.plan_distribution(from, fee)?)
        } else {
            None
        };

        let snapshot = (self.asset_a.amount(), self.asset_b.amount());
        self.balance_of_mut(from_side).credit(net_input);
        self.balance_of_mut(to_side).debit(amount_out);

        if let Err(err) = self.check_invariant() {
            warn!(
                from,
                to,
                amount_in,
                amount_out,
                k = self.invariant_product,
                product = self.asset_a.amount() * self.asset_b.amount(),
                "invariant check failed, swap rolled back"
            );
            self.restore(snapshot);
            return Err(err);
        }

        if let Some(plan) = &plan {
            if let Err(err) = self.providers.apply_distribution(plan) {
                self.restore(snapshot);
                return Err(err);
            }
            self.record_fee(from_side, fee);
        }

        debug!(from, to, amount_in, fee, amount_out, "swap executed");
        Ok(SwapOutcome::new(amount_in, fee, amount_out))
    }

    /// Returns `quote_balance / base_balance`.
    fn spot_price(&self, base: &str, quote: &str) -> Result<f64, AmmError> {
        let base_side = self.side_of(base)?;
        let quote_side = self.side_of(quote)?;
        if base_side == quote_side {
            return Ok(1.0);
        }
        self.balance_of(quote_side)
            .amount()
            .safe_div(&self.balance_of(base_side).amount())
    }

    fn asset_pair(&self) -> &AssetPair {
        &self.pair
    }

    fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }
}

impl LiquidityPool for ConstantProductPool {
    /// Adds a ratio-preserving deposit.
    ///
    /// The ratio test is evaluated cross-multiplied,
    /// `amount_a × b ≈ amount_b × a`, which is equivalent to
    /// `amount_a / amount_b ≈ a / b` without dividing by a zero amount.
    /// Every check and every intermediate value is computed before the
    /// first mutation.
    fn add_liquidity(
        &mut self,
        amount_a: f64,
        amount_b: f64,
        provider_id: &str,
    ) -> Result<(), AmmError> {
        ensure_non_negative(amount_a, "deposit of asset A must be finite and non-negative")?;
        ensure_non_negative(amount_b, "deposit of asset B must be finite and non-negative")?;
        if amount_a == 0.0 && amount_b == 0.0 {
            return Err(AmmError::InvalidAmount("deposit must not be empty"));
        }

        let lhs = amount_a.safe_mul(&self.asset_b.amount())?;
        let rhs = amount_b.safe_mul(&self.asset_a.amount())?;
        if !self.tolerance.approx_eq(lhs, rhs) {
            return Err(AmmError::InvalidRatio);
        }

        let new_a = self.asset_a.amount().safe_add(&amount_a)?;
        let new_b = self.asset_b.amount().safe_add(&amount_b)?;
        let new_k = new_a.safe_mul(&new_b)?;

        self.asset_a.credit(amount_a);
        self.asset_b.credit(amount_b);
        self.invariant_product = new_k;
        self.providers
            .contribute(&self.pair, provider_id, amount_a, amount_b);

        debug!(
            provider = provider_id,
            amount_a,
            amount_b,
            k = self.invariant_product,
            "liquidity added"
        );
        Ok(())
    }

    /// Returns `other_balance / this_balance × amount`.
    fn paired_amount(&self, asset: &str, amount: f64) -> Result<f64, AmmError> {
        let side = self.side_of(asset)?;
        ensure_non_negative(amount, "deposit amount must be finite and non-negative")?;
        let (this, other) = match side {
            Side::A => (&self.asset_a, &self.asset_b),
            Side::B => (&self.asset_b, &self.asset_a),
        };
        other.amount().safe_div(&this.amount())?.safe_mul(&amount)
    }

    fn provider(&self, provider_id: &str) -> Result<&ProviderStake, AmmError> {
        self.providers
            .get(provider_id)
            .ok_or_else(|| AmmError::ProviderNotFound(provider_id.to_string()))
    }

    fn total_stake(&self, asset: &str) -> Result<f64, AmmError> {
        self.side_of(asset)?;
        self.providers.total_stake(asset)
    }
}
