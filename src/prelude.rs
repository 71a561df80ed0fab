//! Convenience re-exports.
//!
//! ```rust
//! use hydra_dex::prelude::*;
//! ```

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::EngineConfig;
pub use crate::domain::{
    AccountId, AddLiquidityRequest, Amount, BasisPoints, CurveKind, Deadline, Decimals, Hop,
    PoolId, PoolKey, Quote, RemoveLiquidityRequest, Rounding, Shares, SwapPath, SwapRequest,
    Token, TokenAddress, TokenPair,
};
pub use crate::error::{AmmError, Result};
pub use crate::ledger::{AssetLedger, InMemoryLedger, LedgerJournal};
pub use crate::math::CheckedArithmetic;
pub use crate::pool::LiquidityPool;
pub use crate::registry::{PoolHandle, PoolRegistry};
pub use crate::router::Router;
