//! Unified error types for the coin-pair pool.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! Every variant except [`AmmError::InvariantViolation`] is detected before
//! the pool is mutated.  An invariant violation is surfaced only after the
//! pool has restored both balances to their pre-swap values.

use thiserror::Error;

/// Errors produced by pool construction, swaps, deposits and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmmError {
    /// Malformed pool construction input (pair name, amounts, fee rate,
    /// tolerance).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The named asset is neither of the pool's two configured assets.
    #[error("unknown asset: {0}")]
    UnknownAsset(String),

    /// A swap named the same asset on both sides.
    #[error("cannot swap an asset for itself")]
    SameAsset,

    /// The swap input exceeds the source balance.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A deposit's two amounts are not in the pool's current ratio.
    #[error("deposit ratio does not match pool ratio")]
    InvalidRatio,

    /// The post-swap product check failed; the pool has been rolled back.
    #[error("invariant product violated after swap")]
    InvariantViolation,

    /// Fee distribution found zero total stake in the fee asset.
    #[error("no stakeholders hold the fee asset")]
    NoStakeholders,

    /// No stake record exists for the given provider.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// An operand is negative, `NaN` or infinite.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A division had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// An arithmetic step produced a non-finite value.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
