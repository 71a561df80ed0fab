//! External balance store seam.

use crate::domain::{AccountId, Amount, TokenAddress};
use crate::error::Result;

/// Balances of every asset the router moves, including LP shares (named by
/// the pool's [`PoolId`](crate::domain::PoolId) address).
///
/// The router only ever calls these methods through a
/// [`LedgerJournal`](super::LedgerJournal), so an implementation needs no
/// transactional support of its own: every applied movement is undone if a
/// later step of the same operation fails.
///
/// Zero-amount movements must succeed without effect.
pub trait AssetLedger {
    /// Removes `amount` of `asset` from `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`](crate::error::AmmError::InsufficientBalance)
    /// if the balance is short.
    fn debit(&mut self, account: AccountId, asset: TokenAddress, amount: Amount) -> Result<()>;

    /// Adds `amount` of `asset` to `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`](crate::error::AmmError::ArithmeticOverflow)
    /// if the balance would leave the `u128` range.
    fn credit(&mut self, account: AccountId, asset: TokenAddress, amount: Amount) -> Result<()>;

    /// Current balance; zero for unknown accounts or assets.
    fn balance_of(&self, account: AccountId, asset: TokenAddress) -> Amount;

    /// Checks that `spender` may move `amount` of `owner`'s `asset`.
    ///
    /// The default allows everything.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AllowanceExceeded`](crate::error::AmmError::AllowanceExceeded)
    /// when the owner has not authorised the transfer.
    fn transfer_allowance_check(
        &self,
        owner: AccountId,
        spender: AccountId,
        asset: TokenAddress,
        amount: Amount,
    ) -> Result<()> {
        let _ = (owner, spender, asset, amount);
        Ok(())
    }

    /// Consumes `amount` of the allowance `owner` granted `spender`.
    ///
    /// The default only runs
    /// [`transfer_allowance_check`](Self::transfer_allowance_check), for
    /// ledgers that track no spendable allowance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AllowanceExceeded`](crate::error::AmmError::AllowanceExceeded)
    /// when the remaining allowance is short. Nothing is consumed on error.
    fn spend_allowance(
        &mut self,
        owner: AccountId,
        spender: AccountId,
        asset: TokenAddress,
        amount: Amount,
    ) -> Result<()> {
        self.transfer_allowance_check(owner, spender, asset, amount)
    }

    /// Gives back allowance taken by [`spend_allowance`](Self::spend_allowance).
    ///
    /// The default does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`](crate::error::AmmError::ArithmeticOverflow)
    /// if the restored allowance leaves the `u128` range.
    fn restore_allowance(
        &mut self,
        owner: AccountId,
        spender: AccountId,
        asset: TokenAddress,
        amount: Amount,
    ) -> Result<()> {
        let _ = (owner, spender, asset, amount);
        Ok(())
    }
}
