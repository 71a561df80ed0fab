//! Asset ledger integration.
//!
//! The engine never holds user balances itself. Every debit and credit goes
//! through an [`AssetLedger`] supplied by the caller, wrapped in a
//! [`LedgerJournal`] so a failed operation leaves the ledger untouched.

mod asset_ledger;
mod in_memory;
mod journal;

pub use asset_ledger::AssetLedger;
pub use in_memory::InMemoryLedger;
pub use journal::LedgerJournal;
