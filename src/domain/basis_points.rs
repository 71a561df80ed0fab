//! Basis-point fee rates.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::Result;
use crate::math::{mul_div, mul_div_up};

/// 100% expressed in basis points.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Pools charge their fee on the input side of every swap; the fee rate is
/// a `BasisPoints` fixed at pool creation.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Amount, BasisPoints, Rounding};
///
/// let fee = BasisPoints::new(30);
/// let charged = fee.apply(Amount::new(1_000), Rounding::Up).expect("no overflow");
/// assert_eq!(charged, Amount::new(3));
/// assert_eq!(fee.complement(), BasisPoints::new(9_970));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Wraps a raw basis-point value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw basis-point value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value lies in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_DENOMINATOR
    }

    /// Returns `true` if the value can serve as a swap fee: strictly below
    /// 100%, so that some input always reaches the curve.
    #[must_use]
    pub const fn is_valid_fee(&self) -> bool {
        self.0 < BPS_DENOMINATOR
    }

    /// Returns `10_000 - self`, saturating at zero.
    #[must_use]
    pub const fn complement(&self) -> Self {
        Self(BPS_DENOMINATOR.saturating_sub(self.0))
    }

    /// Computes `amount * self / 10_000` with a full-width intermediate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`](crate::error::AmmError::ArithmeticOverflow)
    /// if the result does not fit in an [`Amount`].
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        let bps = u128::from(self.0);
        let denom = u128::from(BPS_DENOMINATOR);
        let raw = match rounding {
            Rounding::Down => mul_div(amount.get(), bps, denom)?,
            Rounding::Up => mul_div_up(amount.get(), bps, denom)?,
        };
        Ok(Amount::new(raw))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
