//! Domain value types used throughout the exchange engine.
//!
//! Quantities ([`Amount`], [`Shares`], [`BasisPoints`]), identities
//! ([`TokenAddress`], [`AccountId`], [`Token`], [`TokenPair`], [`PoolKey`],
//! [`PoolId`]), routes ([`Hop`], [`SwapPath`], [`Quote`]), operation
//! outcomes and router requests. All are newtypes or plain records with
//! validated constructors where an invariant exists.

mod account;
mod amount;
mod basis_points;
mod curve_kind;
mod deadline;
mod decimals;
mod pool_key;
mod quote;
mod request;
mod rounding;
mod shares;
mod swap_path;
mod swap_result;
mod token;
mod token_address;
mod token_pair;

pub use account::AccountId;
pub use amount::Amount;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use curve_kind::CurveKind;
pub use deadline::Deadline;
pub use decimals::Decimals;
pub use pool_key::{PoolId, PoolKey};
pub use quote::Quote;
pub use request::{AddLiquidityRequest, RemoveLiquidityRequest, SwapRequest};
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_path::{Hop, SwapPath};
pub use swap_result::{BurnResult, MintResult, SwapResult};
pub use token::Token;
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
