//! Pool registry.
//!
//! Pools are addressed by [`PoolKey`](crate::domain::PoolKey), the sorted
//! token pair plus curve, and identified by the keccak-derived
//! [`PoolId`](crate::domain::PoolId). Each pool lives in its own
//! [`PoolHandle`] so operations on disjoint pools never contend.

mod pool_handle;
mod pool_registry;

pub use pool_handle::PoolHandle;
pub use pool_registry::PoolRegistry;
