//! Token decimal places.

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

const MAX_DECIMALS: u8 = 18;

/// Number of decimal places an asset uses.
///
/// Valid range is `0..=18`. The stable curve normalises every reserve to
/// 18 decimals before evaluating its invariant, so assets with more places
/// cannot be represented.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.factor(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::MAX
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places, the fixed-point scale of the math layer.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

impl TryFrom<u8> for Decimals {
    type Error = AmmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}
