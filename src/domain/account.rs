//! Ledger account identity.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::token_address::write_hex;

/// A 32-byte account identifier understood by the asset ledger.
///
/// [`AccountId::BURN`] is the sink for the permanently locked minimum
/// liquidity; nothing can debit it through the router.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// The all-zero burn account.
    pub const BURN: Self = Self([0u8; 32]);

    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for [`AccountId::BURN`].
    #[must_use]
    pub fn is_burn(&self) -> bool {
        *self == Self::BURN
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}
