//! Canonically ordered pair of distinct tokens.

use serde::{Deserialize, Serialize};

use super::{Token, TokenAddress};
use crate::error::AmmError;

/// An ordered pair of distinct tokens, sorted by address.
///
/// The canonical ordering guarantees `first().address() < second().address()`,
/// so `(A, B)` and `(B, A)` describe the same pair.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Decimals, Token, TokenAddress, TokenPair};
///
/// let tok_a = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let tok_b = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::new(18).expect("valid"));
///
/// let pair = TokenPair::new(tok_b, tok_a).expect("distinct tokens");
/// assert_eq!(pair.first(), tok_a);
/// assert_eq!(pair.second(), tok_b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    token_a: Token,
    token_b: Token,
}

impl TokenPair {
    /// Creates a canonically ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both tokens share an address.
    pub fn new(token1: Token, token2: Token) -> Result<Self, AmmError> {
        if token1.address() == token2.address() {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }

        let (token_a, token_b) = if token1.address() < token2.address() {
            (token1, token2)
        } else {
            (token2, token1)
        };

        Ok(Self { token_a, token_b })
    }

    /// Returns the token with the lower address.
    #[must_use]
    pub const fn first(&self) -> Token {
        self.token_a
    }

    /// Returns the token with the higher address.
    #[must_use]
    pub const fn second(&self) -> Token {
        self.token_b
    }

    /// Returns `true` if `address` names either side of the pair.
    #[must_use]
    pub fn contains(&self, address: TokenAddress) -> bool {
        self.token_a.address() == address || self.token_b.address() == address
    }

    /// Returns `true` if `address` is the first (lower) token.
    #[must_use]
    pub fn is_first(&self, address: TokenAddress) -> bool {
        self.token_a.address() == address
    }

    /// Looks up the pair member with the given address.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `address` is not in the pair.
    pub fn token(&self, address: TokenAddress) -> Result<Token, AmmError> {
        if address == self.token_a.address() {
            Ok(self.token_a)
        } else if address == self.token_b.address() {
            Ok(self.token_b)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Returns the counterpart of `address` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `address` is not in the pair.
    pub fn other(&self, address: TokenAddress) -> Result<Token, AmmError> {
        if address == self.token_a.address() {
            Ok(self.token_b)
        } else if address == self.token_b.address() {
            Ok(self.token_a)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }
}
