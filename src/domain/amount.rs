//! Raw asset quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A raw asset quantity in the asset's smallest unit.
///
/// For 18-decimal assets one whole token is `10^18` raw units, so
/// `Amount` carries the fixed-point value directly. `Amount` never
/// interprets decimals; [`Token`](super::Token) does.
///
/// Arithmetic is checked and returns `None` on overflow or underflow.
/// Wider intermediates live in [`math`](crate::math).
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Amount;
///
/// let reserve = Amount::new(10_000);
/// let fee = Amount::new(30);
/// assert_eq!(reserve.checked_sub(&fee), Some(Amount::new(9_970)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw `u128` quantity.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw quantity.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for the zero amount.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the smaller of two amounts.
    pub fn min(self, other: Self) -> Self {
        core::cmp::min(self, other)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
