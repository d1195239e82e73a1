//! Named quantity of a single asset.

use core::fmt;

/// A named, non-negative quantity of one asset.
///
/// `Balance` is a pure value type: it knows nothing about pools or
/// providers.  Its name is fixed at construction.
///
/// # Debit contract
///
/// [`debit`](Self::debit) is **guarded but silent**: a debit larger than
/// the current amount leaves the balance unchanged and signals nothing.
/// Callers that rely on a debit taking effect must check sufficiency
/// first.  The return value reports whether the debit was applied, for
/// callers that want to observe it.
///
/// # Examples
///
/// ```
/// use coinpair_amm::domain::Balance;
///
/// let mut b = Balance::new("eth", 10.0);
/// b.credit(5.0);
/// assert_eq!(b.amount(), 15.0);
///
/// assert!(!b.debit(100.0)); // ignored
/// assert_eq!(b.amount(), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Balance {
    name: String,
    amount: f64,
}

impl Balance {
    /// Creates a balance with an initial amount.
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Creates an empty balance.
    pub fn zero(name: impl Into<String>) -> Self {
        Self::new(name, 0.0)
    }

    /// Returns the asset identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Adds `value` to the balance.
    pub fn credit(&mut self, value: f64) {
        self.amount += value;
    }

    /// Subtracts `value` if the balance covers it; otherwise does nothing.
    ///
    /// Returns `true` if the debit was applied.
    pub fn debit(&mut self, value: f64) -> bool {
        if value <= self.amount {
            self.amount -= value;
            true
        } else {
            false
        }
    }

    /// Overwrites the amount.  Used by the pool to restore a snapshot.
    pub(crate) fn restore(&mut self, amount: f64) {
        self.amount = amount;
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.name)
    }
}
