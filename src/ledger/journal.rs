//! Compensating journal over an [`AssetLedger`].

use tracing::{debug, warn};

use super::AssetLedger;
use crate::domain::{AccountId, Amount, TokenAddress};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Movement {
    Debit(AccountId, TokenAddress, Amount),
    Credit(AccountId, TokenAddress, Amount),
    /// owner, spender, asset, amount
    Allowance(AccountId, AccountId, TokenAddress, Amount),
}

/// Records every movement applied to the wrapped ledger and reverses them
/// unless [`commit`](Self::commit) is called.
///
/// Dropping an uncommitted journal rolls back, so an early `?` return out of
/// a router operation leaves balances as they were.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{AccountId, Amount, TokenAddress};
/// use hydra_dex::ledger::{AssetLedger, InMemoryLedger, LedgerJournal};
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let usd = TokenAddress::from_bytes([9u8; 32]);
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint_to(alice, usd, Amount::new(100)).expect("seed");
///
/// {
///     let mut journal = LedgerJournal::new(&mut ledger);
///     journal.debit(alice, usd, Amount::new(40)).expect("debit");
///     // dropped without commit
/// }
/// assert_eq!(ledger.balance_of(alice, usd), Amount::new(100));
/// ```
pub struct LedgerJournal<'a> {
    ledger: &'a mut dyn AssetLedger,
    applied: Vec<Movement>,
}

impl<'a> LedgerJournal<'a> {
    /// Starts an empty journal.
    pub fn new(ledger: &'a mut dyn AssetLedger) -> Self {
        Self {
            ledger,
            applied: Vec::new(),
        }
    }

    /// Debits through the journal.
    ///
    /// # Errors
    ///
    /// Propagates the ledger's error; nothing is recorded on failure.
    pub fn debit(&mut self, account: AccountId, asset: TokenAddress, amount: Amount) -> Result<()> {
        self.ledger.debit(account, asset, amount)?;
        self.applied.push(Movement::Debit(account, asset, amount));
        Ok(())
    }

    /// Credits through the journal.
    ///
    /// # Errors
    ///
    /// Propagates the ledger's error; nothing is recorded on failure.
    pub fn credit(
        &mut self,
        account: AccountId,
        asset: TokenAddress,
        amount: Amount,
    ) -> Result<()> {
        self.ledger.credit(account, asset, amount)?;
        self.applied.push(Movement::Credit(account, asset, amount));
        Ok(())
    }

    /// Read-through to the wrapped ledger.
    pub fn balance_of(&self, account: AccountId, asset: TokenAddress) -> Amount {
        self.ledger.balance_of(account, asset)
    }

    /// Spends allowance through the journal; rollback restores it.
    ///
    /// # Errors
    ///
    /// Propagates [`AssetLedger::spend_allowance`]; nothing is recorded on
    /// failure.
    pub fn spend_allowance(
        &mut self,
        owner: AccountId,
        spender: AccountId,
        asset: TokenAddress,
        amount: Amount,
    ) -> Result<()> {
        self.ledger.spend_allowance(owner, spender, asset, amount)?;
        self.applied
            .push(Movement::Allowance(owner, spender, asset, amount));
        Ok(())
    }

    /// Number of movements currently recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    /// Returns `true` if nothing has been applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// Keeps every applied movement.
    pub fn commit(mut self) {
        debug!(movements = self.applied.len(), "ledger journal committed");
        self.applied.clear();
    }

    /// Reverses every applied movement, newest first.
    pub fn rollback(mut self) {
        self.undo();
    }

    fn undo(&mut self) {
        if self.applied.is_empty() {
            return;
        }
        warn!(movements = self.applied.len(), "rolling back ledger movements");
        while let Some(movement) = self.applied.pop() {
            let reverted = match movement {
                Movement::Debit(account, asset, amount) => {
                    self.ledger.credit(account, asset, amount)
                }
                Movement::Credit(account, asset, amount) => {
                    self.ledger.debit(account, asset, amount)
                }
                Movement::Allowance(owner, spender, asset, amount) => {
                    self.ledger.restore_allowance(owner, spender, asset, amount)
                }
            };
            if let Err(err) = reverted {
                warn!(?movement, %err, "ledger compensation failed");
            }
        }
    }
}

impl Drop for LedgerJournal<'_> {
    fn drop(&mut self) {
        self.undo();
    }
}
