//! Pricing and invariant functions, dispatched on [`CurveKind`].
//!
//! | Curve | Invariant | Output for net input `n` |
//! |-------|-----------|--------------------------|
//! | ConstantProduct | `x · y` | `y · n / (x + n)` |
//! | StableSwap | `x³y + xy³` (18-dec normalised) | `y - solve(x + n)` |
//!
//! The stable curve scales every raw amount up to 18 decimals before
//! evaluating and scales the output back down, flooring, so tokens with
//! different decimals price consistently.

use primitive_types::U256;

use crate::domain::{Amount, CurveKind, Decimals, Token};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, narrow, solve_stable_invariant, stable_invariant, WAD};

/// `10^(18 - decimals)`.
fn wad_scale(decimals: Decimals) -> U256 {
    U256::from(WAD / decimals.factor())
}

fn normalize(amount: Amount, token: Token) -> U256 {
    // amount < 2^128 and scale <= 10^18 < 2^60, so the product fits
    U256::from(amount.get()) * wad_scale(token.decimals())
}

fn denormalize(value: U256, token: Token) -> Result<Amount> {
    let raw = narrow(
        value / wad_scale(token.decimals()),
        "denormalised amount exceeds u128",
    )?;
    Ok(Amount::new(raw))
}

/// The curve invariant of a pair of reserves.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if a stable-curve intermediate
/// exceeds `U256`.
pub(crate) fn invariant(
    curve: CurveKind,
    (reserve_x, token_x): (Amount, Token),
    (reserve_y, token_y): (Amount, Token),
) -> Result<U256> {
    match curve {
        CurveKind::ConstantProduct => {
            Ok(U256::from(reserve_x.get()) * U256::from(reserve_y.get()))
        }
        CurveKind::StableSwap => stable_invariant(
            normalize(reserve_x, token_x),
            normalize(reserve_y, token_y),
        ),
    }
}

/// Output paid for `net_in` (input after fee).
///
/// Returns zero rather than an error when the input is too small to move
/// the curve; the caller decides whether a zero output is acceptable.
///
/// # Errors
///
/// - [`AmmError::ArithmeticOverflow`] on an oversized intermediate.
/// - [`AmmError::DivisionByZero`] if both `reserve_in` and `net_in` are zero.
pub(crate) fn amount_out(
    curve: CurveKind,
    net_in: Amount,
    (reserve_in, token_in): (Amount, Token),
    (reserve_out, token_out): (Amount, Token),
) -> Result<Amount> {
    match curve {
        CurveKind::ConstantProduct => {
            let denominator = reserve_in
                .checked_add(&net_in)
                .ok_or(AmmError::ArithmeticOverflow("reserve_in + net_in overflow"))?;
            let out = mul_div(reserve_out.get(), net_in.get(), denominator.get())?;
            Ok(Amount::new(out))
        }
        CurveKind::StableSwap => {
            let x = normalize(reserve_in, token_in);
            let y = normalize(reserve_out, token_out);
            let k = stable_invariant(x, y)?;
            let x_new = x
                .checked_add(normalize(net_in, token_in))
                .ok_or(AmmError::ArithmeticOverflow("stable x_new overflow"))?;
            let y_new = solve_stable_invariant(x_new, y, k)?;
            let y_new = round_up_to_invariant(x_new, y_new, y, k)?;
            if y_new >= y {
                return Ok(Amount::ZERO);
            }
            denormalize(y - y_new, token_out)
        }
    }
}

/// Smallest `y'` in `[y_new, y_cap]` with `stable_invariant(x_new, y') >= k`.
///
/// The solver stops within one unit of a floored root, which can sit just
/// below the true one. `stable_invariant(x_new, y_cap) >= k` holds whenever
/// `x_new` is at least the pre-swap reserve, so the cap is always a valid
/// answer. Gallops up from `y_new`, then bisects.
fn round_up_to_invariant(x_new: U256, y_new: U256, y_cap: U256, k: U256) -> Result<U256> {
    if y_new >= y_cap || stable_invariant(x_new, y_new)? >= k {
        return Ok(y_new);
    }
    let mut below = y_new;
    let mut step = U256::one();
    let mut above = loop {
        let candidate = y_new.saturating_add(step).min(y_cap);
        if candidate == y_cap || stable_invariant(x_new, candidate)? >= k {
            break candidate;
        }
        below = candidate;
        step = step.saturating_mul(U256::from(2u8));
    };
    while above - below > U256::one() {
        let mid = below + (above - below) / U256::from(2u8);
        if stable_invariant(x_new, mid)? >= k {
            above = mid;
        } else {
            below = mid;
        }
    }
    Ok(above)
}
