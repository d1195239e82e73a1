//! Pool implementation and its provider ledger.
//!
//! | Type | Role |
//! |------|------|
//! | [`ConstantProductPool`] | Two-asset `a · b = k` pool with fee sharing |
//! | [`ProviderBook`] | Stake records keyed by provider id |
//! | [`FeeDistribution`] | Planned per-provider fee shares |

pub mod constant_product;
mod provider_book;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use provider_book::{FeeDistribution, ProviderBook};
