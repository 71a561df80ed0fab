//! # Hydra DEX
//!
//! Two-asset automated market maker engine: constant-product and
//! stable-swap pools behind a registry, and a router that quotes and
//! executes multi-hop swaps and liquidity changes against an external
//! asset ledger.
//!
//! All amounts are raw `u128` token units. Curve math runs in 18-decimal
//! fixed point on 256-bit (and 512-bit intermediate) integers; no floats
//! are used anywhere in the core.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use hydra_dex::config::EngineConfig;
//! use hydra_dex::domain::{
//!     AccountId, AddLiquidityRequest, Amount, CurveKind, SwapPath, SwapRequest, Token,
//!     TokenAddress,
//! };
//! use hydra_dex::ledger::{AssetLedger, InMemoryLedger};
//! use hydra_dex::math::WAD;
//! use hydra_dex::registry::PoolRegistry;
//! use hydra_dex::router::Router;
//!
//! // 1. Two 18-decimal tokens and a funded account
//! let alpha = Token::with_wad_decimals(TokenAddress::from_bytes([1u8; 32]));
//! let beta = Token::with_wad_decimals(TokenAddress::from_bytes([2u8; 32]));
//! let alice = AccountId::from_bytes([0xa1; 32]);
//!
//! let mut ledger = InMemoryLedger::new();
//! ledger.mint_to(alice, alpha.address(), Amount::new(20_000 * WAD)).expect("fund");
//! ledger.mint_to(alice, beta.address(), Amount::new(10_000 * WAD)).expect("fund");
//!
//! // 2. A registry with default fees and a router over it
//! let registry = Arc::new(PoolRegistry::new(EngineConfig::default()).expect("config"));
//! let router = Router::new(Arc::clone(&registry));
//!
//! // 3. Seed a constant-product pool (created on first deposit)
//! let deposit = AddLiquidityRequest::new(
//!     alpha,
//!     beta,
//!     CurveKind::ConstantProduct,
//!     Amount::new(10_000 * WAD),
//!     Amount::new(10_000 * WAD),
//!     alice,
//! );
//! router.add_liquidity(&mut ledger, alice, &deposit).expect("deposit");
//!
//! // 4. Quote, then swap 1 000 alpha for beta
//! let path = SwapPath::single(alpha, beta, CurveKind::ConstantProduct);
//! let quote = router.quote(&path, Amount::new(1_000 * WAD)).expect("quote");
//! let request = SwapRequest::new(path, Amount::new(1_000 * WAD), alice)
//!     .with_min_amount_out(quote.amount_out());
//! let out = router.execute_swap(&mut ledger, alice, &request).expect("swap");
//!
//! assert_eq!(out, Amount::new(906_610_893_880_149_131_581));
//! assert_eq!(ledger.balance_of(alice, beta.address()), out);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  SwapRequest / AddLiquidityRequest / RemoveLiquidityRequest
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐        ┌──────────────┐
//! │   Router     │──────▶│  AssetLedger  │  debit / credit via LedgerJournal
//! └──────┬──────┘        └──────────────┘
//!        │ resolve + lock in PoolKey order
//!        ▼
//! ┌─────────────┐
//! │ PoolRegistry │  PoolKey → Arc<PoolHandle> (RwLock<LiquidityPool>)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │LiquidityPool │  reserves, shares, swap / mint / burn
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │    Math      │  mul_div, sqrt, stable-swap Newton solver
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Token`](domain::Token), [`PoolKey`](domain::PoolKey), requests and results |
//! | [`math`]   | Checked arithmetic, WAD fixed point, stable-swap solver |
//! | [`pool`]   | [`LiquidityPool`](pool::LiquidityPool) for both curve families |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) and lock-guarded [`PoolHandle`](registry::PoolHandle) |
//! | [`router`] | [`Router`](router::Router): quotes, swaps, liquidity |
//! | [`ledger`] | [`AssetLedger`](ledger::AssetLedger) seam, journal, in-memory ledger |
//! | [`clock`]  | [`Clock`](clock::Clock) time source for deadlines |
//! | [`config`] | [`EngineConfig`](config::EngineConfig) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod registry;
pub mod router;
