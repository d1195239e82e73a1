//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use coinpair_amm::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{AssetPair, Balance, FeeRate, ProviderStake, SwapOutcome, Tolerance};

// Re-export core traits
pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export configuration
pub use crate::config::PoolConfig;

// Re-export error types
pub use crate::error::{AmmError, Result};

// Re-export pool types
pub use crate::pools::{ConstantProductPool, FeeDistribution, ProviderBook};
