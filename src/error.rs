//! Unified error type for the exchange engine.
//!
//! Every fallible operation in the crate returns [`AmmError`]. No error is
//! swallowed or retried internally: each one aborts the operation that
//! raised it and leaves pool and ledger state exactly as it was.
//!
//! [`AmmError::InvariantViolation`] signals a logic or rounding defect and
//! is the only fatal variant (see [`AmmError::is_fatal`]). Every other
//! variant is an ordinary rejection the caller can act on: adjust amounts,
//! refresh a quote, or retry after [`AmmError::Busy`].

use thiserror::Error;

/// Error taxonomy shared by the math, pool, registry, ledger and router
/// layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// A checked operation left the representable range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A division had a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// An input amount that must be positive was zero.
    #[error("amount must be non-zero")]
    ZeroAmount,

    /// The first deposit does not cover the permanently locked minimum
    /// liquidity.
    #[error("initial deposit does not exceed the minimum liquidity lock")]
    InsufficientInitialLiquidity,

    /// Burning zero shares, or more shares than the caller or the pool holds.
    #[error("insufficient shares")]
    InsufficientShares,

    /// Reserves cannot satisfy the request, or the pool has not been
    /// seeded yet.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The curve invariant decreased across a swap.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// A hop of the path does not resolve to an existing pool, or the hops
    /// do not chain.
    #[error("path does not resolve to existing pools")]
    PathResolutionError,

    /// The swap path has no hops.
    #[error("swap path is empty")]
    EmptyPath,

    /// The executed terms are worse than the caller's minimums.
    #[error("slippage limit exceeded")]
    SlippageExceeded,

    /// The operation was submitted after its deadline.
    #[error("deadline expired")]
    DeadlineExpired,

    /// A pool lock could not be acquired within the configured wait.
    #[error("pool is busy")]
    Busy,

    /// The ledger refused a debit for lack of funds.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The caller has not authorised the router to move the asset.
    #[error("allowance exceeded")]
    AllowanceExceeded,

    /// A token is not part of the pool, or a pair repeats one address.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A fee rate is outside `0..10_000` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Decimal places outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// An [`EngineConfig`](crate::config::EngineConfig) value is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl AmmError {
    /// Returns `true` for errors that indicate a defect rather than an
    /// expected rejection.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
