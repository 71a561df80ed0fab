//! Chain-agnostic asset address.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A 32-byte asset identifier.
///
/// Every 32-byte sequence is a valid address, so construction is
/// infallible. Ordering is lexicographic on the bytes and defines the
/// canonical order of a [`TokenPair`](super::TokenPair).
///
/// LP assets are addressed by their pool's
/// [`PoolId`](super::PoolId::as_address).
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::TokenAddress;
///
/// let a = TokenAddress::from_bytes([1u8; 32]);
/// let b = TokenAddress::from_bytes([2u8; 32]);
/// assert!(a < b);
/// assert!(a.to_string().starts_with("0x0101"));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for TokenAddress {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

/// Writes `bytes` as `0x`-prefixed lowercase hex.
pub(crate) fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("0x")?;
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}
