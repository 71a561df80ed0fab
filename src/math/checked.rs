//! Checked arithmetic trait for quantity newtypes.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning `checked_*` methods
//! of [`Amount`] and [`Shares`] into `Result`s carrying an [`AmmError`],
//! so pool code can use `?` throughout.
//!
//! # Examples
//!
//! ```
//! use hydra_dex::domain::Amount;
//! use hydra_dex::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(10_000);
//! assert_eq!(reserve.safe_add(&Amount::new(1)), Ok(Amount::new(10_001)));
//! assert!(reserve.safe_sub(&Amount::new(10_001)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for quantity newtypes.
///
/// No method saturates or panics: every failure is an `Err`.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] past the representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("amount subtraction underflow"))
    }
}

// ---------------------------------------------------------------------------
// Shares
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("shares addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("shares subtraction underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Amount ------------------------------------------------------------

    #[test]
    fn amount_add() {
        assert_eq!(Amount::new(2).safe_add(&Amount::new(3)), Ok(Amount::new(5)));
        assert_eq!(
            Amount::MAX.safe_add(&Amount::new(1)),
            Err(AmmError::ArithmeticOverflow("amount addition overflow"))
        );
    }

    #[test]
    fn amount_sub_underflow() {
        assert_eq!(
            Amount::new(1).safe_sub(&Amount::new(2)),
            Err(AmmError::ArithmeticOverflow("amount subtraction underflow"))
        );
    }

    // -- Shares ------------------------------------------------------------

    #[test]
    fn shares_add_sub() {
        assert_eq!(Shares::new(1_000).safe_add(&Shares::new(1)), Ok(Shares::new(1_001)));
        assert!(Shares::new(1).safe_sub(&Shares::new(2)).is_err());
        assert!(Shares::new(u128::MAX).safe_add(&Shares::new(1)).is_err());
    }
}
