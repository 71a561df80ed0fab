//! Asset identity with decimal places.

use serde::{Deserialize, Serialize};

use super::{Decimals, TokenAddress};

/// A tradable asset: its address and the number of decimals its raw
/// amounts carry.
///
/// Equality and ordering consider the address first, so two `Token`s with
/// the same address but different decimals are still distinct values;
/// pool addressing only ever looks at [`address`](Self::address).
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Decimals, Token, TokenAddress};
///
/// let usdc = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// assert_eq!(usdc.decimals().get(), 6);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Token {
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub const fn new(address: TokenAddress, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// An 18-decimal token at `address`.
    #[must_use]
    pub const fn with_wad_decimals(address: TokenAddress) -> Self {
        Self::new(address, Decimals::MAX)
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}
