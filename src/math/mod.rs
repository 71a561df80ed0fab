//! Exact integer arithmetic for pool math.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`mul_div`], [`mul_div_up`] | `a·b/c` on `u128` with a 256-bit product |
//! | [`mul_div_wide`] | `a·b/c` on `U256` with a 512-bit product |
//! | [`sqrt`] | floor integer square root (first mint) |
//! | [`stable_invariant`], [`solve_stable_invariant`] | stable-swap curve |
//! | [`CheckedArithmetic`] | `Result`-returning ops on [`Amount`](crate::domain::Amount) and [`Shares`](crate::domain::Shares) |
//!
//! There is no floating point anywhere in the crate.

mod checked;
mod fixed_point;
mod stable;

pub use checked::CheckedArithmetic;
pub use fixed_point::{mul_div, mul_div_up, mul_div_wide, narrow, sqrt, wad, WAD};
pub use stable::{
    curve_derivative, curve_value, solve_stable_invariant, stable_invariant,
    STABLE_SOLVER_MAX_ITERATIONS,
};
