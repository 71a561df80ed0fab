//! Liquidity pools.
//!
//! A single [`LiquidityPool`] record serves both curve families; only the
//! pricing and invariant functions in the private `curve` module are
//! polymorphic over [`CurveKind`](crate::domain::CurveKind).

mod curve;
mod liquidity_pool;

#[cfg(test)]
mod proptest_properties;

pub use liquidity_pool::{LiquidityPool, MINIMUM_LIQUIDITY};
