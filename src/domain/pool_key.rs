//! Deterministic pool addressing.

use core::fmt;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use super::token_address::write_hex;
use super::{CurveKind, TokenAddress};
use crate::error::AmmError;

/// Registry key of a pool: its two asset addresses in canonical order plus
/// the curve kind.
///
/// The derived `Ord` is the global lock order: operations touching several
/// pools lock them in ascending `PoolKey` order.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{CurveKind, PoolKey, TokenAddress};
///
/// let a = TokenAddress::from_bytes([1u8; 32]);
/// let b = TokenAddress::from_bytes([2u8; 32]);
/// let k1 = PoolKey::new(a, b, CurveKind::StableSwap).expect("distinct");
/// let k2 = PoolKey::new(b, a, CurveKind::StableSwap).expect("distinct");
/// assert_eq!(k1, k2);
/// assert_eq!(k1.id(), k2.id());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PoolKey {
    token_a: TokenAddress,
    token_b: TokenAddress,
    curve: CurveKind,
}

impl PoolKey {
    /// Builds the canonical key for two assets and a curve, in either
    /// argument order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both addresses are equal.
    pub fn new(a: TokenAddress, b: TokenAddress, curve: CurveKind) -> Result<Self, AmmError> {
        if a == b {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        let (token_a, token_b) = if a < b { (a, b) } else { (b, a) };
        Ok(Self {
            token_a,
            token_b,
            curve,
        })
    }

    /// The lower asset address.
    #[must_use]
    pub const fn token_a(&self) -> TokenAddress {
        self.token_a
    }

    /// The higher asset address.
    #[must_use]
    pub const fn token_b(&self) -> TokenAddress {
        self.token_b
    }

    /// The curve kind.
    #[must_use]
    pub const fn curve(&self) -> CurveKind {
        self.curve
    }

    /// `keccak256(token_a ‖ token_b ‖ curve_tag)`.
    #[must_use]
    pub fn id(&self) -> PoolId {
        let mut hasher = Keccak256::new();
        hasher.update(self.token_a.as_bytes());
        hasher.update(self.token_b.as_bytes());
        hasher.update([self.curve.tag()]);
        PoolId(hasher.finalize().into())
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.token_a, self.token_b, self.curve)
    }
}

/// Deterministic 32-byte pool address, also the address of the pool's LP
/// asset on the ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PoolId([u8; 32]);

impl PoolId {
    /// Returns the raw digest.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The ledger address of this pool's LP asset.
    #[must_use]
    pub const fn as_address(&self) -> TokenAddress {
        TokenAddress::from_bytes(self.0)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}
