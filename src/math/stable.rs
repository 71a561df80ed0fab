//! Stable-swap invariant `x³y + xy³ = k` and its Newton solver.
//!
//! All inputs are reserves already normalised to 18 decimals. Every
//! product is floor-divided by [`WAD`](super::WAD) in a fixed order, so
//! the invariant, its derivative and the solver are bit-reproducible.
//!
//! The solver contract:
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Start point | current output reserve |
//! | Step | `Δy = |f(x, y) - k| · WAD / f'(x, y)`, towards `k` |
//! | Exit | `|y_next - y| <= 1` |
//! | Iteration cap | [`STABLE_SOLVER_MAX_ITERATIONS`] |
//!
//! When the cap is reached the last iterate is returned; the pool's
//! post-swap invariant check rejects any result that would let `k` fall.

use primitive_types::U256;
use tracing::warn;

use super::fixed_point::{mul_div_wide, wad};
use crate::error::{AmmError, Result};

/// Upper bound on Newton iterations in [`solve_stable_invariant`].
pub const STABLE_SOLVER_MAX_ITERATIONS: usize = 255;

/// `k = (x·y / WAD) · (x² / WAD + y² / WAD) / WAD`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if an intermediate exceeds
/// `U256`.
///
/// # Examples
///
/// ```
/// use hydra_dex::math::{stable_invariant, WAD};
/// use primitive_types::U256;
///
/// let one = U256::from(WAD);
/// assert_eq!(stable_invariant(one, one), Ok(U256::from(2 * WAD)));
/// ```
pub fn stable_invariant(x: U256, y: U256) -> Result<U256> {
    let w = wad();
    let xy = mul_div_wide(x, y, w)?;
    let x2 = mul_div_wide(x, x, w)?;
    let y2 = mul_div_wide(y, y, w)?;
    let sum = x2
        .checked_add(y2)
        .ok_or(AmmError::ArithmeticOverflow("stable invariant sum overflow"))?;
    mul_div_wide(xy, sum, w)
}

/// `f(x, y) = x·y³ + x³·y`, in the same floor order as the solver uses.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if an intermediate exceeds
/// `U256`.
pub fn curve_value(x: U256, y: U256) -> Result<U256> {
    let w = wad();
    let y3 = mul_div_wide(mul_div_wide(y, y, w)?, y, w)?;
    let x3 = mul_div_wide(mul_div_wide(x, x, w)?, x, w)?;
    let left = mul_div_wide(x, y3, w)?;
    let right = mul_div_wide(x3, y, w)?;
    left.checked_add(right)
        .ok_or(AmmError::ArithmeticOverflow("stable curve value overflow"))
}

/// `∂f/∂y = 3·x·y² + x³`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if an intermediate exceeds
/// `U256`.
pub fn curve_derivative(x: U256, y: U256) -> Result<U256> {
    let w = wad();
    let y2 = mul_div_wide(y, y, w)?;
    let three_x = x
        .checked_mul(U256::from(3u8))
        .ok_or(AmmError::ArithmeticOverflow("stable derivative overflow"))?;
    let left = mul_div_wide(three_x, y2, w)?;
    let x3 = mul_div_wide(mul_div_wide(x, x, w)?, x, w)?;
    left.checked_add(x3)
        .ok_or(AmmError::ArithmeticOverflow("stable derivative overflow"))
}

/// Finds `y` such that `f(x_new, y) ≈ k`, starting from `y_start`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if the derivative vanishes (zero
///   reserves).
/// - [`AmmError::ArithmeticOverflow`] if a step overflows or would drive
///   `y` below zero.
pub fn solve_stable_invariant(x_new: U256, y_start: U256, k: U256) -> Result<U256> {
    solve_counting_iterations(x_new, y_start, k).map(|(y, _)| y)
}

pub(crate) fn solve_counting_iterations(
    x_new: U256,
    y_start: U256,
    k: U256,
) -> Result<(U256, usize)> {
    let w = wad();
    let mut y = y_start;
    for iteration in 1..=STABLE_SOLVER_MAX_ITERATIONS {
        let previous = y;
        let value = curve_value(x_new, y)?;
        let slope = curve_derivative(x_new, y)?;
        if value < k {
            let step = mul_div_wide(k - value, w, slope)?;
            y = y
                .checked_add(step)
                .ok_or(AmmError::ArithmeticOverflow("stable solver step overflow"))?;
        } else {
            let step = mul_div_wide(value - k, w, slope)?;
            y = y
                .checked_sub(step)
                .ok_or(AmmError::ArithmeticOverflow("stable solver step underflow"))?;
        }
        let delta = if y > previous { y - previous } else { previous - y };
        if delta <= U256::one() {
            return Ok((y, iteration));
        }
    }
    warn!(
        iterations = STABLE_SOLVER_MAX_ITERATIONS,
        "stable solver hit its iteration cap"
    );
    Ok((y, STABLE_SOLVER_MAX_ITERATIONS))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::math::WAD;

    fn tokens(n: u128) -> U256 {
        U256::from(n * WAD)
    }

    fn solve_fixture(amount_in_net: u128) -> (U256, usize) {
        let reserve = tokens(10_000);
        let Ok(k) = stable_invariant(reserve, reserve) else {
            panic!("expected Ok");
        };
        let Ok(solution) =
            solve_counting_iterations(reserve + U256::from(amount_in_net), reserve, k)
        else {
            panic!("expected Ok");
        };
        solution
    }

    // -- invariant -----------------------------------------------------------

    #[test]
    fn invariant_of_unit_reserves() {
        assert_eq!(stable_invariant(tokens(1), tokens(1)), Ok(tokens(2)));
    }

    #[test]
    fn invariant_is_symmetric() {
        let (x, y) = (tokens(3), tokens(7));
        assert_eq!(stable_invariant(x, y), stable_invariant(y, x));
    }

    #[test]
    fn curve_value_matches_invariant_on_balanced_reserves() {
        let r = tokens(10_000);
        let (Ok(k), Ok(f)) = (stable_invariant(r, r), curve_value(r, r)) else {
            panic!("expected Ok");
        };
        assert_eq!(k, f);
    }

    #[test]
    fn derivative_is_positive_for_positive_reserves() {
        let Ok(d) = curve_derivative(tokens(5), tokens(5)) else {
            panic!("expected Ok");
        };
        // 3 * 5 * 25 + 125 = 500 whole units
        assert_eq!(d, tokens(500));
    }

    // -- solver fixtures -----------------------------------------------------

    #[test]
    fn solver_fixture_one_basis_point() {
        // 1000 in, 0.1 fee taken
        let (y, iterations) = solve_fixture(999_900_000_000_000_000_000);
        assert_eq!(y, U256::from(9_000_599_282_387_744_807_714u128));
        assert_eq!(tokens(10_000) - y, U256::from(999_400_717_612_255_192_286u128));
        assert!(iterations <= 7);
    }

    #[test]
    fn solver_fixture_four_basis_points() {
        let (y, _) = solve_fixture(999_600_000_000_000_000_000);
        assert_eq!(tokens(10_000) - y, U256::from(999_101_316_071_275_857_143u128));
    }

    #[test]
    fn solver_fixture_thirty_basis_points() {
        let (y, _) = solve_fixture(997_000_000_000_000_000_000);
        assert_eq!(tokens(10_000) - y, U256::from(996_506_480_231_247_732_537u128));
    }

    #[test]
    fn solver_is_identity_without_input() {
        let r = tokens(10_000);
        let Ok(k) = stable_invariant(r, r) else {
            panic!("expected Ok");
        };
        let Ok(y) = solve_stable_invariant(r, r, k) else {
            panic!("expected Ok");
        };
        assert_eq!(y, r);
    }

    #[test]
    fn solver_fails_on_zero_reserves() {
        assert_eq!(
            solve_stable_invariant(U256::zero(), U256::zero(), U256::one()),
            Err(AmmError::DivisionByZero)
        );
    }
}
