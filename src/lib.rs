//! # Coin-pair AMM
//!
//! A two-asset constant-product liquidity pool: it tracks the balances of
//! two assets held jointly by liquidity providers, executes swaps under
//! the `a × b = k` invariant, and pays every swap fee out to the providers
//! of the input asset in proportion to their stake.
//!
//! The crate is a single-threaded accounting engine for one pool.  It has
//! no persistence, network or CLI layer; those belong to the embedding
//! application, which must serialize mutating calls against a pool.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | yes | `Serialize`/`Deserialize` for configs and value types |
//!
//! ## Create a pool, swap, and add liquidity
//!
//! ```rust
//! use coinpair_amm::pools::ConstantProductPool;
//! use coinpair_amm::traits::{LiquidityPool, SwapPool};
//!
//! // 1. Bootstrap a 1000/1000 pool with a 0.3% fee, credited to "p0"
//! let mut pool = ConstantProductPool::create("A-B", 1_000.0, 1_000.0, 0.003, "p0")
//!     .expect("pool created");
//!
//! // 2. Sell 100 A for B; the 0.3 A fee goes to p0's stake
//! let outcome = pool.swap("A", "B", 100.0).expect("swap succeeded");
//! assert!(outcome.amount_out() > 90.0);
//!
//! // 3. Deposit at the current ratio on behalf of "p1"
//! let paired = pool.paired_amount("A", 50.0).expect("known asset");
//! pool.add_liquidity(50.0, paired, "p1").expect("ratio matches");
//! assert!(pool.provider("p1").is_ok());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │      Consumer        │  PoolConfig or ConstantProductPool::create
//! └──────────┬───────────┘
//!            │ swap / add_liquidity / paired_amount / provider
//!            ▼
//! ┌──────────────────────┐
//! │ ConstantProductPool  │  owns two Balances, k, fee rate, tolerance
//! └──────────┬───────────┘
//!            │ plan + apply fee shares
//!            ▼
//! ┌──────────────────────┐
//! │    ProviderBook      │  ProviderStake per provider id
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │       Domain         │  Balance, AssetPair, FeeRate, Tolerance, …
//! └──────────────────────┘
//! ```
//!
//! # Numeric Contract
//!
//! Quantities are `f64`.  Invariant and ratio checks use a relative
//! epsilon, [`Tolerance::DEFAULT`](domain::Tolerance::DEFAULT) = `1e-9`,
//! overridable per pool through [`PoolConfig`](config::PoolConfig).
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Balance`](domain::Balance), [`ProviderStake`](domain::ProviderStake), [`FeeRate`](domain::FeeRate), … |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) pool blueprint |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) and [`ProviderBook`](pools::ProviderBook) |
//! | [`math`]   | Checked `f64` arithmetic |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
