use tracing::info;

use super::{quote_liquidity, Router};
use crate::clock::Clock;
use crate::domain::{
    AccountId, AddLiquidityRequest, Amount, CurveKind, RemoveLiquidityRequest, Shares, Token,
    TokenAddress, TokenPair,
};
use crate::error::{AmmError, Result};
use crate::ledger::{AssetLedger, LedgerJournal};
use crate::pool::LiquidityPool;

/// Reorders a canonical `(first, second)` pair to follow `caller_first`.
fn in_caller_order<T>(pool: &LiquidityPool, caller_first: TokenAddress, values: (T, T)) -> (T, T) {
    if pool.pair().is_first(caller_first) {
        values
    } else {
        (values.1, values.0)
    }
}

/// Picks the amounts to deposit, in canonical order.
///
/// An empty pool takes the desired amounts as given. Otherwise the larger
/// side is trimmed to the pool ratio and checked against its minimum.
fn plan_deposit(
    pool: &LiquidityPool,
    desired: (Amount, Amount),
    minimums: (Amount, Amount),
) -> Result<(Amount, Amount)> {
    if pool.is_empty() {
        return Ok(desired);
    }
    let (reserve_a, reserve_b) = pool.reserves();
    let b_optimal = quote_liquidity(desired.0, reserve_a, reserve_b)?;
    if b_optimal <= desired.1 {
        if b_optimal < minimums.1 {
            return Err(AmmError::SlippageExceeded);
        }
        return Ok((desired.0, b_optimal));
    }
    let a_optimal = quote_liquidity(desired.1, reserve_b, reserve_a)?.min(desired.0);
    if a_optimal < minimums.0 {
        return Err(AmmError::SlippageExceeded);
    }
    Ok((a_optimal, desired.1))
}

impl<C: Clock> Router<C> {
    /// Deposits both assets of a pair, creating the pool on first use.
    ///
    /// Returns `(amount_a, amount_b, shares)` with the amounts actually
    /// consumed, in the request's token order. The first deposit into a
    /// pool also credits the locked minimum liquidity to
    /// [`AccountId::BURN`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::DeadlineExpired`] past the deadline.
    /// - [`AmmError::InvalidToken`] if both tokens share an address.
    /// - [`AmmError::Busy`] if the pool lock times out.
    /// - [`AmmError::SlippageExceeded`] if a consumed amount is below its
    ///   minimum.
    /// - [`AmmError::InsufficientInitialLiquidity`] /
    ///   [`AmmError::InsufficientLiquidity`] from the mint.
    /// - Ledger errors such as [`AmmError::InsufficientBalance`].
    pub fn add_liquidity(
        &self,
        ledger: &mut dyn AssetLedger,
        caller: AccountId,
        request: &AddLiquidityRequest,
    ) -> Result<(Amount, Amount, Shares)> {
        request.deadline.ensure_open(self.clock.now())?;
        let handle = self
            .registry
            .create_pool(request.token_a, request.token_b, request.curve)?;
        let mut guard = handle.lock()?;
        let mut pool = LiquidityPool::clone(&guard);

        let caller_first = request.token_a.address();
        let desired = in_caller_order(
            &pool,
            caller_first,
            (request.amount_a_desired, request.amount_b_desired),
        );
        let minimums = in_caller_order(
            &pool,
            caller_first,
            (request.amount_a_min, request.amount_b_min),
        );
        let (supply_a, supply_b) = plan_deposit(&pool, desired, minimums)?;
        let minted = pool.mint(supply_a, supply_b)?;
        if minted.amount_a < minimums.0 || minted.amount_b < minimums.1 {
            return Err(AmmError::SlippageExceeded);
        }

        let (first, second) = (pool.pair().first(), pool.pair().second());
        let lp_asset = pool.id().as_address();
        let mut journal = LedgerJournal::new(ledger);
        for (token, amount) in [(first, minted.amount_a), (second, minted.amount_b)] {
            journal.spend_allowance(caller, self.account, token.address(), amount)?;
        }
        journal.debit(caller, first.address(), minted.amount_a)?;
        journal.debit(caller, second.address(), minted.amount_b)?;
        journal.credit(request.recipient, lp_asset, minted.shares.to_amount())?;
        journal.credit(AccountId::BURN, lp_asset, minted.locked.to_amount())?;

        *guard = pool;
        journal.commit();
        info!(
            pool = %handle.id(),
            caller = %caller,
            amount_a = %minted.amount_a,
            amount_b = %minted.amount_b,
            shares = %minted.shares,
            "liquidity added"
        );
        let (amount_a, amount_b) =
            in_caller_order(&guard, caller_first, (minted.amount_a, minted.amount_b));
        Ok((amount_a, amount_b, minted.shares))
    }

    /// Burns LP shares for a proportional slice of both reserves.
    ///
    /// Returns `(amount_a, amount_b)` in the request's token order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DeadlineExpired`] past the deadline.
    /// - [`AmmError::PathResolutionError`] if the pool does not exist.
    /// - [`AmmError::Busy`] if the pool lock times out.
    /// - [`AmmError::InsufficientShares`] for zero shares, more than the
    ///   pool's supply, or more than `caller` holds. This takes precedence
    ///   over the minimums.
    /// - [`AmmError::SlippageExceeded`] if an output is below its minimum.
    pub fn remove_liquidity(
        &self,
        ledger: &mut dyn AssetLedger,
        caller: AccountId,
        request: &RemoveLiquidityRequest,
    ) -> Result<(Amount, Amount)> {
        request.deadline.ensure_open(self.clock.now())?;
        if caller.is_burn() {
            return Err(AmmError::InsufficientShares);
        }
        let handle = self.registry.resolve_pool(
            request.token_a.address(),
            request.token_b.address(),
            request.curve,
        )?;
        let mut guard = handle.lock()?;
        let mut pool = LiquidityPool::clone(&guard);

        let burned = pool.burn(request.shares)?;

        // shares are debited before the minimums are judged
        let (first, second) = (pool.pair().first(), pool.pair().second());
        let lp_asset = pool.id().as_address();
        let shares = request.shares.to_amount();
        let mut journal = LedgerJournal::new(ledger);
        journal.spend_allowance(caller, self.account, lp_asset, shares)?;
        journal
            .debit(caller, lp_asset, shares)
            .map_err(|err| match err {
                AmmError::InsufficientBalance => AmmError::InsufficientShares,
                other => other,
            })?;

        let caller_first = request.token_a.address();
        let (amount_a, amount_b) =
            in_caller_order(&pool, caller_first, (burned.amount_a, burned.amount_b));
        if amount_a < request.amount_a_min || amount_b < request.amount_b_min {
            return Err(AmmError::SlippageExceeded);
        }

        journal.credit(request.recipient, first.address(), burned.amount_a)?;
        journal.credit(request.recipient, second.address(), burned.amount_b)?;

        *guard = pool;
        journal.commit();
        info!(
            pool = %handle.id(),
            caller = %caller,
            shares = %request.shares,
            amount_a = %amount_a,
            amount_b = %amount_b,
            "liquidity removed"
        );
        Ok((amount_a, amount_b))
    }

    /// Read-only preview of [`add_liquidity`](Self::add_liquidity) with no
    /// minimums.
    ///
    /// A pool that does not exist yet is previewed as its first deposit.
    ///
    /// # Errors
    ///
    /// Same pool and mint errors as `add_liquidity`; never touches a
    /// ledger.
    pub fn quote_add_liquidity(
        &self,
        token_a: Token,
        token_b: Token,
        curve: CurveKind,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
    ) -> Result<(Amount, Amount, Shares)> {
        let pool = match self
            .registry
            .resolve_pool(token_a.address(), token_b.address(), curve)
        {
            Ok(handle) => handle.snapshot()?,
            Err(AmmError::PathResolutionError) => LiquidityPool::new(
                TokenPair::new(token_a, token_b)?,
                curve,
                self.registry.config().fee_for(curve),
            )?,
            Err(err) => return Err(err),
        };
        let caller_first = token_a.address();
        let desired = in_caller_order(&pool, caller_first, (amount_a_desired, amount_b_desired));
        let (supply_a, supply_b) = plan_deposit(&pool, desired, (Amount::ZERO, Amount::ZERO))?;
        let minted = pool.preview_mint(supply_a, supply_b)?;
        let (amount_a, amount_b) =
            in_caller_order(&pool, caller_first, (minted.amount_a, minted.amount_b));
        Ok((amount_a, amount_b, minted.shares))
    }

    /// Read-only preview of [`remove_liquidity`](Self::remove_liquidity).
    ///
    /// Returns zeros for a pool that does not exist.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientShares`] and the other burn errors of an
    /// existing pool.
    pub fn quote_remove_liquidity(
        &self,
        token_a: TokenAddress,
        token_b: TokenAddress,
        curve: CurveKind,
        shares: Shares,
    ) -> Result<(Amount, Amount)> {
        let handle = match self.registry.resolve_pool(token_a, token_b, curve) {
            Ok(handle) => handle,
            Err(AmmError::PathResolutionError) => return Ok((Amount::ZERO, Amount::ZERO)),
            Err(err) => return Err(err),
        };
        let pool = handle.snapshot()?;
        let burned = pool.preview_burn(shares)?;
        Ok(in_caller_order(
            &pool,
            token_a,
            (burned.amount_a, burned.amount_b),
        ))
    }

    /// Current reserves in the caller's token order; zeros for a pool that
    /// does not exist.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `token_a == token_b`.
    /// - [`AmmError::Busy`] if the pool stays write-locked.
    pub fn reserves(
        &self,
        token_a: TokenAddress,
        token_b: TokenAddress,
        curve: CurveKind,
    ) -> Result<(Amount, Amount)> {
        match self.registry.resolve_pool(token_a, token_b, curve) {
            Ok(handle) => {
                let pool = handle.snapshot()?;
                Ok(in_caller_order(&pool, token_a, pool.reserves()))
            }
            Err(AmmError::PathResolutionError) => Ok((Amount::ZERO, Amount::ZERO)),
            Err(err) => Err(err),
        }
    }
}
