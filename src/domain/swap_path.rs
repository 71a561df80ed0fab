//! Multi-hop swap routes.

use serde::{Deserialize, Serialize};

use super::{CurveKind, PoolKey, Token};
use crate::error::{AmmError, Result};

/// One single-pool leg of a swap path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hop {
    /// Asset paid into the pool.
    pub from: Token,
    /// Asset received from the pool.
    pub to: Token,
    /// Curve of the pool serving this hop.
    pub curve: CurveKind,
}

impl Hop {
    /// Creates a hop.
    #[must_use]
    pub const fn new(from: Token, to: Token, curve: CurveKind) -> Self {
        Self { from, to, curve }
    }

    /// Registry key of the pool serving this hop.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `from` and `to` share an address.
    pub fn key(&self) -> Result<PoolKey> {
        PoolKey::new(self.from.address(), self.to.address(), self.curve)
    }
}

/// An ordered sequence of hops.
///
/// Construction is infallible; [`validate`](Self::validate) checks the
/// path is non-empty and that consecutive hops chain
/// (`hops[i].to == hops[i + 1].from`). The router validates every path
/// before touching a pool.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{CurveKind, Hop, SwapPath, Token, TokenAddress};
///
/// let a = Token::with_wad_decimals(TokenAddress::from_bytes([1u8; 32]));
/// let b = Token::with_wad_decimals(TokenAddress::from_bytes([2u8; 32]));
/// let c = Token::with_wad_decimals(TokenAddress::from_bytes([3u8; 32]));
///
/// let path = SwapPath::new(vec![
///     Hop::new(a, b, CurveKind::ConstantProduct),
///     Hop::new(b, c, CurveKind::StableSwap),
/// ]);
/// assert!(path.validate().is_ok());
/// assert_eq!(path.token_in(), Some(a));
/// assert_eq!(path.token_out(), Some(c));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SwapPath {
    hops: Vec<Hop>,
}

impl SwapPath {
    /// Wraps a list of hops without validating it.
    #[must_use]
    pub const fn new(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    /// A one-hop path.
    #[must_use]
    pub fn single(from: Token, to: Token, curve: CurveKind) -> Self {
        Self::new(vec![Hop::new(from, to, curve)])
    }

    /// Checks the path is usable.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPath`] if there are no hops.
    /// - [`AmmError::PathResolutionError`] if a hop does not chain into the
    ///   next one, or a hop trades an asset for itself.
    pub fn validate(&self) -> Result<()> {
        if self.hops.is_empty() {
            return Err(AmmError::EmptyPath);
        }
        if self
            .hops
            .iter()
            .any(|hop| hop.from.address() == hop.to.address())
        {
            return Err(AmmError::PathResolutionError);
        }
        if self
            .hops
            .windows(2)
            .any(|pair| pair[0].to.address() != pair[1].from.address())
        {
            return Err(AmmError::PathResolutionError);
        }
        Ok(())
    }

    /// The hops in order.
    #[must_use]
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Number of hops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Returns `true` if the path has no hops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Asset paid in at the first hop.
    #[must_use]
    pub fn token_in(&self) -> Option<Token> {
        self.hops.first().map(|hop| hop.from)
    }

    /// Asset received at the last hop.
    #[must_use]
    pub fn token_out(&self) -> Option<Token> {
        self.hops.last().map(|hop| hop.to)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::TokenAddress;

    fn tok(byte: u8) -> Token {
        Token::with_wad_decimals(TokenAddress::from_bytes([byte; 32]))
    }

    #[test]
    fn empty_path_is_rejected() {
        let path = SwapPath::default();
        assert!(path.is_empty());
        assert_eq!(path.validate(), Err(AmmError::EmptyPath));
        assert_eq!(path.token_in(), None);
    }

    #[test]
    fn broken_chain_is_rejected() {
        let path = SwapPath::new(vec![
            Hop::new(tok(1), tok(2), CurveKind::ConstantProduct),
            Hop::new(tok(3), tok(4), CurveKind::ConstantProduct),
        ]);
        assert_eq!(path.validate(), Err(AmmError::PathResolutionError));
    }

    #[test]
    fn self_hop_is_rejected() {
        let path = SwapPath::single(tok(1), tok(1), CurveKind::StableSwap);
        assert_eq!(path.validate(), Err(AmmError::PathResolutionError));
    }

    #[test]
    fn revisiting_a_pool_is_allowed() {
        let path = SwapPath::new(vec![
            Hop::new(tok(1), tok(2), CurveKind::ConstantProduct),
            Hop::new(tok(2), tok(1), CurveKind::ConstantProduct),
        ]);
        assert_eq!(path.validate(), Ok(()));
        assert_eq!(path.len(), 2);
        let (Ok(k0), Ok(k1)) = (path.hops()[0].key(), path.hops()[1].key()) else {
            panic!("expected Ok");
        };
        assert_eq!(k0, k1);
    }
}
