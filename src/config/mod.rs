//! Declarative pool blueprints.
//!
//! A [`PoolConfig`] captures every immutable parameter needed to build a
//! pool.  Constructors validate eagerly; pools built through
//! [`FromConfig`](crate::traits::FromConfig) validate again so that
//! deserialized configs cannot skip the checks.

mod pool_config;

pub use pool_config::PoolConfig;
