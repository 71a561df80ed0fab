//! Stateless swap and liquidity orchestration.
//!
//! The [`Router`] resolves pools through the [`PoolRegistry`], locks every
//! pool an operation touches in ascending [`PoolKey`] order, runs the pool
//! math on staged copies and only then moves assets through a
//! [`LedgerJournal`](crate::ledger::LedgerJournal). Pool state is written
//! back after every ledger movement has succeeded, so a failure at any step
//! leaves both pools and balances untouched.
//!
//! | Operation | Pools locked | Ledger movements |
//! |-----------|--------------|------------------|
//! | [`Router::quote`] | none (read snapshots) | none |
//! | [`Router::execute_swap`] | every distinct pool on the path | debit input, credit output |
//! | [`Router::add_liquidity`] | the target pool | debit both assets, credit shares |
//! | [`Router::remove_liquidity`] | the target pool | debit shares, credit both assets |

mod liquidity;
mod swap;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use parking_lot::RwLockWriteGuard;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::domain::{AccountId, Amount, PoolKey, Quote, SwapPath, TokenAddress};
use crate::error::{AmmError, Result};
use crate::math::mul_div;
use crate::pool::LiquidityPool;
use crate::registry::{PoolHandle, PoolRegistry};

/// Account the router presents as spender in allowance checks unless
/// configured otherwise.
pub const DEFAULT_ROUTER_ACCOUNT: AccountId = AccountId::from_bytes([0xee; 32]);

/// Entry point for quotes, swaps and liquidity changes.
///
/// A router holds no pool or balance state of its own; any number of
/// routers may share one registry.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use hydra_dex::config::EngineConfig;
/// use hydra_dex::domain::{Amount, CurveKind, SwapPath, Token, TokenAddress};
/// use hydra_dex::registry::PoolRegistry;
/// use hydra_dex::router::Router;
///
/// let registry = Arc::new(PoolRegistry::new(EngineConfig::default()).expect("config"));
/// let a = Token::with_wad_decimals(TokenAddress::from_bytes([1u8; 32]));
/// let b = Token::with_wad_decimals(TokenAddress::from_bytes([2u8; 32]));
/// let pool = registry.create_pool(a, b, CurveKind::ConstantProduct).expect("pool");
/// pool.lock()
///     .expect("lock")
///     .mint(Amount::new(10_000), Amount::new(10_000))
///     .expect("seed");
///
/// let router = Router::new(Arc::clone(&registry));
/// let path = SwapPath::single(a, b, CurveKind::ConstantProduct);
/// let quote = router.quote(&path, Amount::new(1_000)).expect("quote");
/// assert_eq!(quote.amount_out(), Amount::new(906));
/// ```
#[derive(Debug)]
pub struct Router<C: Clock = SystemClock> {
    registry: Arc<PoolRegistry>,
    clock: C,
    account: AccountId,
}

impl Router<SystemClock> {
    /// A router reading wall-clock time.
    #[must_use]
    pub fn new(registry: Arc<PoolRegistry>) -> Self {
        Self::with_clock(registry, SystemClock)
    }
}

impl<C: Clock> Router<C> {
    /// A router with an explicit time source.
    #[must_use]
    pub fn with_clock(registry: Arc<PoolRegistry>, clock: C) -> Self {
        Self {
            registry,
            clock,
            account: DEFAULT_ROUTER_ACCOUNT,
        }
    }

    /// Sets the spender identity used for allowance checks.
    #[must_use]
    pub fn with_account(mut self, account: AccountId) -> Self {
        self.account = account;
        self
    }

    /// The shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<PoolRegistry> {
        &self.registry
    }

    /// Spender identity used for allowance checks.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Exact-input quote along `path`.
    ///
    /// Each distinct pool is snapshotted once and the hops run in order on
    /// the snapshots, so a path that revisits a pool sees its own earlier
    /// effect. No pool is modified.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPath`] for a path with no hops.
    /// - [`AmmError::PathResolutionError`] if the hops do not chain or a
    ///   pool is missing.
    /// - [`AmmError::Busy`] if a pool stays write-locked past the timeout.
    /// - Any pool pricing error, e.g. [`AmmError::InsufficientLiquidity`].
    pub fn quote(&self, path: &SwapPath, amount_in: Amount) -> Result<Quote> {
        path.validate()?;
        let handles = self.resolve_path(path)?;
        let mut staged = BTreeMap::new();
        for handle in &handles {
            staged.insert(handle.key(), handle.snapshot()?);
        }
        let amounts = run_hops(&mut staged, path, amount_in)?;
        let quote = Quote::new(amounts);
        debug!(hops = quote.hops(), amount_in = %quote.amount_in(), amount_out = %quote.amount_out(), "quote");
        Ok(quote)
    }

    /// Handles for every distinct pool on `path`, in lock order.
    fn resolve_path(&self, path: &SwapPath) -> Result<Vec<Arc<PoolHandle>>> {
        let keys = path
            .hops()
            .iter()
            .map(|hop| hop.key())
            .collect::<Result<BTreeSet<PoolKey>>>()?;
        keys.iter()
            .map(|key| self.registry.resolve_key(key))
            .collect()
    }
}

/// Proportional counterpart of `amount_a` at the ratio `reserve_a : reserve_b`,
/// rounded down.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `amount_a` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote_liquidity(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        return Err(AmmError::ZeroAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(amount_a.get(), reserve_b.get(), reserve_a.get()).map(Amount::new)
}

/// Orders two addresses canonically.
///
/// # Errors
///
/// Returns [`AmmError::InvalidToken`] if `a == b`.
pub fn sort_tokens(a: TokenAddress, b: TokenAddress) -> Result<(TokenAddress, TokenAddress)> {
    match a.cmp(&b) {
        core::cmp::Ordering::Less => Ok((a, b)),
        core::cmp::Ordering::Greater => Ok((b, a)),
        core::cmp::Ordering::Equal => Err(AmmError::InvalidToken("identical token addresses")),
    }
}

/// Acquires write guards on every handle, in slice order.
///
/// On failure every guard already taken is released.
fn lock_all(handles: &[Arc<PoolHandle>]) -> Result<Vec<RwLockWriteGuard<'_, LiquidityPool>>> {
    handles.iter().map(|handle| handle.lock()).collect()
}

/// Clones the locked pools into a scratch map.
fn stage(guards: &[RwLockWriteGuard<'_, LiquidityPool>]) -> BTreeMap<PoolKey, LiquidityPool> {
    guards
        .iter()
        .map(|guard| (guard.key(), LiquidityPool::clone(guard)))
        .collect()
}

/// Writes staged pool states back through their guards.
fn commit(
    guards: &mut [RwLockWriteGuard<'_, LiquidityPool>],
    mut staged: BTreeMap<PoolKey, LiquidityPool>,
) {
    for guard in guards.iter_mut() {
        if let Some(pool) = staged.remove(&guard.key()) {
            **guard = pool;
        }
    }
}

/// Swaps hop by hop on `staged`, returning every node amount.
fn run_hops(
    staged: &mut BTreeMap<PoolKey, LiquidityPool>,
    path: &SwapPath,
    amount_in: Amount,
) -> Result<Vec<Amount>> {
    let mut amounts = Vec::with_capacity(path.len() + 1);
    amounts.push(amount_in);
    let mut current = amount_in;
    for hop in path.hops() {
        let pool = staged
            .get_mut(&hop.key()?)
            .ok_or(AmmError::PathResolutionError)?;
        let result = pool.swap(hop.from.address(), current)?;
        debug!(pool = %pool.id(), amount_in = %current, amount_out = %result.amount_out, fee = %result.fee, "hop");
        current = result.amount_out;
        amounts.push(current);
    }
    Ok(amounts)
}
