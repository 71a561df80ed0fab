//! 18-decimal fixed-point primitives over wide integers.
//!
//! Products are always formed at double width ([`U256`] for `u128`
//! operands, [`U512`] for `U256` operands) so the multiplication itself can
//! never overflow; only a quotient that does not fit the target width is
//! an error.

use primitive_types::{U256, U512};

use crate::error::{AmmError, Result};

/// The fixed-point scale: `10^18`.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// [`WAD`] as a [`U256`].
#[must_use]
pub fn wad() -> U256 {
    U256::from(WAD)
}

/// `a * b / denominator`, truncated, with a 256-bit intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator == 0`.
/// - [`AmmError::ArithmeticOverflow`] if the quotient exceeds `u128`.
///
/// # Examples
///
/// ```
/// use hydra_dex::math::mul_div;
///
/// assert_eq!(mul_div(u128::MAX, 4, 8), Ok(u128::MAX / 2));
/// assert!(mul_div(u128::MAX, 2, 1).is_err());
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    narrow(product / U256::from(denominator), "mul_div result exceeds u128")
}

/// Ceiling variant of [`mul_div`].
///
/// # Errors
///
/// Same as [`mul_div`].
pub fn mul_div_up(a: u128, b: u128, denominator: u128) -> Result<u128> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    let (quotient, remainder) = product.div_mod(U256::from(denominator));
    let quotient = if remainder.is_zero() {
        quotient
    } else {
        // a remainder implies denominator >= 2, so this cannot wrap
        quotient + U256::one()
    };
    narrow(quotient, "mul_div_up result exceeds u128")
}

/// `a * b / denominator`, truncated, with a 512-bit intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator == 0`.
/// - [`AmmError::ArithmeticOverflow`] if the quotient exceeds `U256`.
pub fn mul_div_wide(a: U256, b: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let quotient = a.full_mul(b) / U512::from(denominator);
    U256::try_from(quotient)
        .map_err(|_| AmmError::ArithmeticOverflow("mul_div_wide result exceeds U256"))
}

/// Integer square root, floor for non-squares.
///
/// Babylonian iteration starting from `x / 2 + 1`; monotonically decreasing
/// so the loop terminates at `floor(sqrt(x))`.
#[must_use]
pub fn sqrt(x: U256) -> U256 {
    if x > U256::from(3u8) {
        let two = U256::from(2u8);
        let mut z = x;
        let mut next = x / two + U256::one();
        while next < z {
            z = next;
            next = (x / next + next) / two;
        }
        z
    } else if x.is_zero() {
        U256::zero()
    } else {
        U256::one()
    }
}

/// Converts a [`U256`] to `u128`, failing with `context` if it does not fit.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] when `value > u128::MAX`.
pub fn narrow(value: U256, context: &'static str) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(AmmError::ArithmeticOverflow(context));
    }
    Ok(value.low_u128())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- mul_div -------------------------------------------------------------

    #[test]
    fn mul_div_truncates() {
        assert_eq!(mul_div(10, 10, 3), Ok(33));
        assert_eq!(mul_div_up(10, 10, 3), Ok(34));
        assert_eq!(mul_div_up(9, 10, 3), Ok(30));
    }

    #[test]
    fn mul_div_full_width_intermediate() {
        // u128::MAX * u128::MAX overflows 128 bits but the quotient fits
        assert_eq!(mul_div(u128::MAX, u128::MAX, u128::MAX), Ok(u128::MAX));
        assert_eq!(mul_div_up(u128::MAX, u128::MAX, u128::MAX), Ok(u128::MAX));
    }

    #[test]
    fn mul_div_rejects_oversized_quotient() {
        assert_eq!(
            mul_div(u128::MAX, 2, 1),
            Err(AmmError::ArithmeticOverflow("mul_div result exceeds u128"))
        );
        assert!(mul_div_up(u128::MAX, u128::MAX, u128::MAX - 1).is_err());
    }

    #[test]
    fn mul_div_rejects_zero_denominator() {
        assert_eq!(mul_div(1, 1, 0), Err(AmmError::DivisionByZero));
        assert_eq!(mul_div_up(1, 1, 0), Err(AmmError::DivisionByZero));
        assert_eq!(
            mul_div_wide(U256::one(), U256::one(), U256::zero()),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn mul_div_wide_uses_512_bits() {
        let big = U256::MAX;
        assert_eq!(mul_div_wide(big, big, big), Ok(big));
        assert!(mul_div_wide(big, U256::from(2u8), U256::one()).is_err());
    }

    // -- sqrt ----------------------------------------------------------------

    #[test]
    fn sqrt_small_values() {
        assert_eq!(sqrt(U256::zero()), U256::zero());
        assert_eq!(sqrt(U256::one()), U256::one());
        assert_eq!(sqrt(U256::from(3u8)), U256::one());
        assert_eq!(sqrt(U256::from(4u8)), U256::from(2u8));
        assert_eq!(sqrt(U256::from(15u8)), U256::from(3u8));
        assert_eq!(sqrt(U256::from(16u8)), U256::from(4u8));
    }

    #[test]
    fn sqrt_exact_for_wad_squares() {
        let ten_thousand = U256::from(10_000u128 * WAD);
        assert_eq!(sqrt(ten_thousand * ten_thousand), ten_thousand);
    }

    #[test]
    fn sqrt_of_max_is_floor() {
        let root = sqrt(U256::MAX);
        assert_eq!(root, U256::from(u128::MAX));
    }

    // -- narrow --------------------------------------------------------------

    #[test]
    fn narrow_bounds() {
        assert_eq!(narrow(U256::from(u128::MAX), "ctx"), Ok(u128::MAX));
        assert_eq!(
            narrow(U256::from(u128::MAX) + U256::one(), "ctx"),
            Err(AmmError::ArithmeticOverflow("ctx"))
        );
    }
}
