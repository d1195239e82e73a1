//! Coin-pair pool walkthrough.
//!
//! Demonstrates creating a pool, executing swaps, adding liquidity at the
//! current ratio, and inspecting how fees were shared among providers.
//! Pool events are logged through `tracing`; set `RUST_LOG=debug` (or
//! `trace` for per-provider fee credits) to see them.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example swap_walkthrough
//! ```

use coinpair_amm::config::PoolConfig;
use coinpair_amm::domain::{AssetPair, FeeRate};
use coinpair_amm::pools::ConstantProductPool;
use coinpair_amm::traits::{FromConfig, LiquidityPool, SwapPool};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Coin-pair AMM (a · b = k) ===\n");

    // ── 1. Configure an eth/mtv pool with a 0.30% fee ───────────────────
    let pair = AssetPair::parse("eth-mtv")?;
    let config = PoolConfig::new(pair, 1_000.0, 4_000.0, FeeRate::STANDARD, "genesis")?;
    let mut pool = ConstantProductPool::from_config(&config)?;

    println!("Pool {}: fee {}", pool.asset_pair(), pool.fee_rate());
    println!("  {}  |  {}", pool.asset_a(), pool.asset_b());
    println!("  k = {}", pool.invariant_product());
    println!("  spot eth→mtv = {}", pool.spot_price("eth", "mtv")?);

    // ── 2. A second provider joins at the current ratio ─────────────────
    let mtv = pool.paired_amount("eth", 250.0)?;
    pool.add_liquidity(250.0, mtv, "alice")?;
    println!("\nalice deposits 250 eth + {mtv} mtv");
    println!("  k = {}", pool.invariant_product());

    // ── 3. Trade in both directions ─────────────────────────────────────
    let sell_eth = pool.swap("eth", "mtv", 100.0)?;
    println!("\nSell 100 eth: {sell_eth}");
    let sell_mtv = pool.swap("mtv", "eth", 300.0)?;
    println!("Sell 300 mtv: {sell_mtv}");
    println!("  {}  |  {}", pool.asset_a(), pool.asset_b());

    // ── 4. A rejected deposit leaves the pool untouched ─────────────────
    match pool.add_liquidity(10.0, 40.0, "bob") {
        Ok(()) => println!("\nbob's 10/40 deposit accepted"),
        Err(err) => println!("\nbob's 10/40 deposit rejected: {err}"),
    }

    // ── 5. Fee shares ───────────────────────────────────────────────────
    println!("\nProvider stakes:");
    for stake in pool.providers().iter() {
        println!("  {stake}");
    }
    println!(
        "Fees paid out: {} eth, {} mtv",
        pool.accumulated_fees("eth")?,
        pool.accumulated_fees("mtv")?
    );

    Ok(())
}
