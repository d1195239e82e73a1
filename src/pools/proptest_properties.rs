//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Invariant preservation**: `a × b ≈ k` after any valid swap.
//! 2. **Conservation with fee**: the source balance grows by
//!    `amount_in × (1 − r)`.
//! 3. **Ratio preservation**: a paired deposit keeps `a / b`.
//! 4. **Proportional fee split**: shares follow stake and sum to the fee.
//! 5. **Pure paired-amount query**: repeated calls agree and mutate nothing.
//! 6. **Failed swaps are inert**: an oversized input leaves the pool as-is.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::ConstantProductPool;
use crate::domain::Tolerance;
use crate::error::AmmError;
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_pool(a: f64, b: f64, fee_rate: f64) -> ConstantProductPool {
    let Ok(pool) = ConstantProductPool::create("A-B", a, b, fee_rate, "p0") else {
        panic!("valid pool");
    };
    pool
}

fn approx(a: f64, b: f64) -> bool {
    Tolerance::DEFAULT.approx_eq(a, b)
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Balances in [1, 1e7] to avoid degenerate extremes.
fn balance_strategy() -> impl Strategy<Value = f64> {
    1.0f64..1e7
}

/// Fee rates in [0, 0.1].
fn fee_strategy() -> impl Strategy<Value = f64> {
    (0u32..=1_000u32).prop_map(|v| f64::from(v) / 10_000.0)
}

/// Fraction of the source balance to swap, in (0, 1].
fn fraction_strategy() -> impl Strategy<Value = f64> {
    (1u32..=1_000u32).prop_map(|v| f64::from(v) / 1_000.0)
}

// ---------------------------------------------------------------------------
// Swap properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn swap_preserves_invariant(
        a in balance_strategy(),
        b in balance_strategy(),
        fee in fee_strategy(),
        fraction in fraction_strategy(),
        a_to_b in any::<bool>(),
    ) {
        let mut pool = make_pool(a, b, fee);
        let k = pool.invariant_product();
        let (from, to) = if a_to_b { ("A", "B") } else { ("B", "A") };
        let Ok(source) = pool.balance(from).map(|bal| bal.amount()) else {
            panic!("known asset");
        };

        let result = pool.swap(from, to, source * fraction);
        prop_assert!(result.is_ok(), "swap failed: {:?}", result);

        let product = pool.asset_a().amount() * pool.asset_b().amount();
        prop_assert!(approx(product, k), "product {} drifted from k {}", product, k);
        prop_assert!(pool.asset_a().amount() >= 0.0);
        prop_assert!(pool.asset_b().amount() >= 0.0);
    }

    #[test]
    fn source_grows_by_net_input(
        a in balance_strategy(),
        b in balance_strategy(),
        fee in fee_strategy(),
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(a, b, fee);
        let amount_in = a * fraction;

        let Ok(outcome) = pool.swap("A", "B", amount_in) else {
            panic!("expected Ok");
        };

        let expected = a + amount_in * (1.0 - fee);
        prop_assert!(approx(pool.asset_a().amount(), expected));
        prop_assert!(approx(outcome.fee() + outcome.net_input(), amount_in));
    }

    #[test]
    fn oversized_swap_is_inert(
        a in balance_strategy(),
        b in balance_strategy(),
        excess in 1.0f64..1e6,
    ) {
        let mut pool = make_pool(a, b, 0.003);
        let before = pool.clone();
        prop_assert_eq!(
            pool.swap("A", "B", a + excess),
            Err(AmmError::InsufficientLiquidity)
        );
        prop_assert_eq!(pool, before);
    }
}

// ---------------------------------------------------------------------------
// Liquidity and fee-sharing properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn paired_deposit_preserves_ratio(
        a in balance_strategy(),
        b in balance_strategy(),
        deposit in 1.0f64..1e6,
        swap_first in any::<bool>(),
    ) {
        let mut pool = make_pool(a, b, 0.003);
        if swap_first {
            let Ok(_) = pool.swap("A", "B", a / 3.0) else {
                panic!("expected Ok");
            };
        }
        let ratio_before = pool.asset_a().amount() / pool.asset_b().amount();

        let Ok(paired) = pool.paired_amount("A", deposit) else {
            panic!("expected Ok");
        };
        let result = pool.add_liquidity(deposit, paired, "p1");
        prop_assert!(result.is_ok(), "deposit rejected: {:?}", result);

        let ratio_after = pool.asset_a().amount() / pool.asset_b().amount();
        prop_assert!(approx(ratio_before, ratio_after));
        prop_assert_eq!(
            pool.invariant_product(),
            pool.asset_a().amount() * pool.asset_b().amount()
        );
    }

    #[test]
    fn fee_split_is_proportional(
        a in balance_strategy(),
        b in balance_strategy(),
        share in 1u32..=99u32,
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(a, b, 0.01);
        // p1 deposits `share`% of the pool's current depth.
        let deposit_a = a * f64::from(share) / 100.0;
        let Ok(deposit_b) = pool.paired_amount("A", deposit_a) else {
            panic!("expected Ok");
        };
        let Ok(()) = pool.add_liquidity(deposit_a, deposit_b, "p1") else {
            panic!("paired deposit accepted");
        };

        let Ok(stakes_before) = pool.total_stake("A") else {
            panic!("known asset");
        };
        let Ok(p0_before) = pool.provider("p0").map(|s| s.stake_a().amount()) else {
            panic!("p0 registered");
        };
        let Ok(p1_before) = pool.provider("p1").map(|s| s.stake_a().amount()) else {
            panic!("p1 registered");
        };

        let amount_in = pool.asset_a().amount() * fraction;
        let Ok(outcome) = pool.swap("A", "B", amount_in) else {
            panic!("expected Ok");
        };
        let fee = outcome.fee();

        let Ok(p0_after) = pool.provider("p0").map(|s| s.stake_a().amount()) else {
            panic!("p0 registered");
        };
        let Ok(p1_after) = pool.provider("p1").map(|s| s.stake_a().amount()) else {
            panic!("p1 registered");
        };
        let p0_gain = p0_after - p0_before;
        let p1_gain = p1_after - p1_before;

        let tol = 1e-9 * fee.max(1.0);
        prop_assert!((p0_gain - fee * p0_before / stakes_before).abs() <= tol);
        prop_assert!((p1_gain - fee * p1_before / stakes_before).abs() <= tol);
        prop_assert!((p0_gain + p1_gain - fee).abs() <= tol);
    }

    #[test]
    fn paired_amount_is_pure(
        a in balance_strategy(),
        b in balance_strategy(),
        amount in 0.0f64..1e6,
        a_side in any::<bool>(),
    ) {
        let pool = make_pool(a, b, 0.003);
        let before = pool.clone();
        let asset = if a_side { "A" } else { "B" };
        let first = pool.paired_amount(asset, amount);
        let second = pool.paired_amount(asset, amount);
        prop_assert_eq!(first, second);
        prop_assert_eq!(pool, before);
    }
}
