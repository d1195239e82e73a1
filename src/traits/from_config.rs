//! Construction trait for building a pool from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating pool instances
//! from a configuration struct.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed pool is guaranteed to be in a
//! valid initial state: two distinct asset names, positive initial
//! amounts, a fee rate in `[0, 1)` and a registered bootstrap provider.

use crate::error::AmmError;

/// Builds a pool from a configuration.
///
/// # Type Parameters
///
/// - `C`: the configuration type describing the pool's immutable
///   parameters.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for ConstantProductPool`
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// The configuration is taken by reference so it can be reused, e.g.
    /// to build an identical pool for a dry run.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out
    /// of range or inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
