//! Fundamental domain value types used throughout the pool.
//!
//! This module contains the value types that model the pool's ledger:
//! asset pairs, balances, provider stakes, fee rates, comparison
//! tolerance, and swap outcomes.  Types with invariants use validated
//! constructors.

mod asset_pair;
mod balance;
mod fee_rate;
mod provider_stake;
mod swap_outcome;
mod tolerance;

pub use asset_pair::{AssetPair, PAIR_SEPARATOR};
pub use balance::Balance;
pub use fee_rate::FeeRate;
pub use provider_stake::ProviderStake;
pub use swap_outcome::SwapOutcome;
pub use tolerance::Tolerance;
