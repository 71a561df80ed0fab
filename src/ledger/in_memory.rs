//! Hash-map backed ledger.

use std::collections::HashMap;

use super::AssetLedger;
use crate::domain::{AccountId, Amount, TokenAddress};
use crate::error::{AmmError, Result};

/// In-process [`AssetLedger`] for tests and embedded use.
///
/// Allowances are only enforced after
/// [`enforce_allowances`](Self::enforce_allowances) is switched on; an
/// owner moving its own funds never needs one. Enforced allowances are
/// spent as the router moves funds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: HashMap<(AccountId, TokenAddress), Amount>,
    allowances: HashMap<(AccountId, AccountId, TokenAddress), Amount>,
    supply: HashMap<TokenAddress, Amount>,
    enforce_allowances: bool,
}

impl InMemoryLedger {
    /// An empty ledger with allowances disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches allowance enforcement on or off.
    #[must_use]
    pub fn enforce_allowances(mut self, enforce: bool) -> Self {
        self.enforce_allowances = enforce;
        self
    }

    /// Seeds `account` with newly issued `amount` of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the balance or supply
    /// overflows.
    pub fn mint_to(&mut self, account: AccountId, asset: TokenAddress, amount: Amount) -> Result<()> {
        self.credit(account, asset, amount)
    }

    /// Authorises `spender` to move up to `amount` of `owner`'s `asset`.
    pub fn approve(
        &mut self,
        owner: AccountId,
        spender: AccountId,
        asset: TokenAddress,
        amount: Amount,
    ) {
        self.allowances.insert((owner, spender, asset), amount);
    }

    /// Current allowance from `owner` to `spender`.
    #[must_use]
    pub fn allowance(&self, owner: AccountId, spender: AccountId, asset: TokenAddress) -> Amount {
        self.allowances
            .get(&(owner, spender, asset))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Sum of every account's balance of `asset`.
    #[must_use]
    pub fn total_supply(&self, asset: TokenAddress) -> Amount {
        self.supply.get(&asset).copied().unwrap_or(Amount::ZERO)
    }
}

impl AssetLedger for InMemoryLedger {
    fn debit(&mut self, account: AccountId, asset: TokenAddress, amount: Amount) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let balance = self.balance_of(account, asset);
        let remaining = balance
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance)?;
        let supply = self
            .total_supply(asset)
            .checked_sub(&amount)
            .ok_or(AmmError::ArithmeticOverflow("ledger supply underflow"))?;
        self.balances.insert((account, asset), remaining);
        self.supply.insert(asset, supply);
        Ok(())
    }

    fn credit(&mut self, account: AccountId, asset: TokenAddress, amount: Amount) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let balance = self
            .balance_of(account, asset)
            .checked_add(&amount)
            .ok_or(AmmError::ArithmeticOverflow("ledger balance overflow"))?;
        let supply = self
            .total_supply(asset)
            .checked_add(&amount)
            .ok_or(AmmError::ArithmeticOverflow("ledger supply overflow"))?;
        self.balances.insert((account, asset), balance);
        self.supply.insert(asset, supply);
        Ok(())
    }

    fn balance_of(&self, account: AccountId, asset: TokenAddress) -> Amount {
        self.balances
            .get(&(account, asset))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer_allowance_check(
        &self,
        owner: AccountId,
        spender: AccountId,
        asset: TokenAddress,
        amount: Amount,
    ) -> Result<()> {
        if !self.enforce_allowances || owner == spender {
            return Ok(());
        }
        if self.allowance(owner, spender, asset) < amount {
            return Err(AmmError::AllowanceExceeded);
        }
        Ok(())
    }

    fn spend_allowance(
        &mut self,
        owner: AccountId,
        spender: AccountId,
        asset: TokenAddress,
        amount: Amount,
    ) -> Result<()> {
        if !self.enforce_allowances || owner == spender || amount.is_zero() {
            return Ok(());
        }
        let remaining = self
            .allowance(owner, spender, asset)
            .checked_sub(&amount)
            .ok_or(AmmError::AllowanceExceeded)?;
        self.allowances.insert((owner, spender, asset), remaining);
        Ok(())
    }

    fn restore_allowance(
        &mut self,
        owner: AccountId,
        spender: AccountId,
        asset: TokenAddress,
        amount: Amount,
    ) -> Result<()> {
        if !self.enforce_allowances || owner == spender || amount.is_zero() {
            return Ok(());
        }
        let restored = self
            .allowance(owner, spender, asset)
            .checked_add(&amount)
            .ok_or(AmmError::ArithmeticOverflow("allowance overflow"))?;
        self.allowances.insert((owner, spender, asset), restored);
        Ok(())
    }
}
