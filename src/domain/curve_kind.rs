//! Pricing curve discriminant.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The pricing curve a pool is configured with.
///
/// Both curves share the same pool record (reserves, shares, fee); only
/// the pricing and invariant functions differ, dispatched in
/// [`pool::curve`](crate::pool).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CurveKind {
    /// `x · y = k`.
    ConstantProduct,
    /// `x³y + xy³ = k` on 18-decimal normalised reserves.
    StableSwap,
}

impl CurveKind {
    /// One-byte tag hashed into the [`PoolId`](super::PoolId).
    #[must_use]
    pub const fn tag(&self) -> u8 {
        match self {
            Self::ConstantProduct => 0,
            Self::StableSwap => 1,
        }
    }

    /// Returns `true` for [`CurveKind::StableSwap`].
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::StableSwap)
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantProduct => f.write_str("constant-product"),
            Self::StableSwap => f.write_str("stable-swap"),
        }
    }
}
