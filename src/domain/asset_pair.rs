//! Pair of distinct asset identifiers parsed from a compound name.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// Separator between the two asset identifiers in a pair name.
pub const PAIR_SEPARATOR: char = '-';

/// An ordered pair of distinct asset identifiers.
///
/// Unlike a canonically sorted pair, the order here is the order in the
/// compound name: `"eth-mtv"` yields `first() == "eth"` and
/// `second() == "mtv"`.  The first asset is the pool's asset A.
///
/// # Examples
///
/// ```
/// use coinpair_amm::domain::AssetPair;
///
/// let pair: AssetPair = "eth-mtv".parse().expect("two assets");
/// assert_eq!(pair.first(), "eth");
/// assert_eq!(pair.second(), "mtv");
/// assert!("eth".parse::<AssetPair>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    first: String,
    second: String,
}

impl AssetPair {
    /// Creates a pair from two asset identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if either identifier is
    /// empty or both are the same.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, AmmError> {
        let first = first.into();
        let second = second.into();
        if first.is_empty() || second.is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "asset identifiers must be non-empty",
            ));
        }
        if first == second {
            return Err(AmmError::InvalidConfiguration(
                "asset pair requires two distinct assets",
            ));
        }
        Ok(Self { first, second })
    }

    /// Parses a compound name such as `"eth-mtv"`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] unless the name splits on
    /// [`PAIR_SEPARATOR`] into exactly two distinct, non-empty parts.
    pub fn parse(name: &str) -> Result<Self, AmmError> {
        let mut parts = name.split(PAIR_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) => Self::new(first, second),
            _ => Err(AmmError::InvalidConfiguration(
                "pair name must contain exactly two assets",
            )),
        }
    }

    /// Returns asset A.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns asset B.
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Returns `true` if `asset` is one of the two identifiers.
    #[must_use]
    pub fn contains(&self, asset: &str) -> bool {
        self.first == asset || self.second == asset
    }

    /// Returns the counterpart of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownAsset`] if `asset` is not in the pair.
    pub fn other(&self, asset: &str) -> Result<&str, AmmError> {
        if asset == self.first {
            Ok(&self.second)
        } else if asset == self.second {
            Ok(&self.first)
        } else {
            Err(AmmError::UnknownAsset(asset.to_string()))
        }
    }
}

impl FromStr for AssetPair {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PAIR_SEPARATOR}{}", self.first, self.second)
    }
}
