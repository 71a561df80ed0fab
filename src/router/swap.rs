use tracing::info;

use super::{commit, lock_all, run_hops, stage, Router};
use crate::clock::Clock;
use crate::domain::{AccountId, Amount, SwapRequest};
use crate::error::{AmmError, Result};
use crate::ledger::{AssetLedger, LedgerJournal};

impl<C: Clock> Router<C> {
    /// Executes an exact-input swap along `request.path`.
    ///
    /// The output is recomputed under lock; a previously obtained
    /// [`Quote`](crate::domain::Quote) is never trusted. `caller` pays
    /// `request.amount_in` of the first token and `request.recipient`
    /// receives the final output.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DeadlineExpired`] if the clock is past the deadline.
    /// - [`AmmError::EmptyPath`] / [`AmmError::PathResolutionError`] for a
    ///   bad path.
    /// - [`AmmError::ZeroAmount`] for a zero input.
    /// - [`AmmError::Busy`] if a pool lock times out.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `request.min_amount_out`.
    /// - Ledger errors such as [`AmmError::InsufficientBalance`].
    ///
    /// On any error no pool and no balance changes.
    pub fn execute_swap(
        &self,
        ledger: &mut dyn AssetLedger,
        caller: AccountId,
        request: &SwapRequest,
    ) -> Result<Amount> {
        request.deadline.ensure_open(self.clock.now())?;
        let path = &request.path;
        path.validate()?;
        let (Some(token_in), Some(token_out)) = (path.token_in(), path.token_out()) else {
            return Err(AmmError::EmptyPath);
        };
        if request.amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }

        let handles = self.resolve_path(path)?;
        let mut guards = lock_all(&handles)?;
        let mut staged = stage(&guards);

        let amounts = run_hops(&mut staged, path, request.amount_in)?;
        let amount_out = amounts.last().copied().unwrap_or(Amount::ZERO);
        if amount_out < request.min_amount_out {
            return Err(AmmError::SlippageExceeded);
        }

        let mut journal = LedgerJournal::new(ledger);
        journal.spend_allowance(
            caller,
            self.account,
            token_in.address(),
            request.amount_in,
        )?;
        journal.debit(caller, token_in.address(), request.amount_in)?;
        journal.credit(request.recipient, token_out.address(), amount_out)?;

        commit(&mut guards, staged);
        journal.commit();
        info!(
            caller = %caller,
            recipient = %request.recipient,
            hops = path.len(),
            amount_in = %request.amount_in,
            amount_out = %amount_out,
            "swap executed"
        );
        Ok(amount_out)
    }
}
