//! Router operation requests.
//!
//! Each request carries the caller's limits: minimum acceptable amounts,
//! the recipient of the proceeds and a [`Deadline`]. Requests are built
//! with a constructor for the mandatory fields and `with_*` setters for
//! the limits, which default to no minimum and no expiry.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, CurveKind, Deadline, Shares, SwapPath, Token};

/// An exact-input swap along a path.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{AccountId, Amount, CurveKind, Deadline, SwapPath, SwapRequest, Token, TokenAddress};
///
/// let a = Token::with_wad_decimals(TokenAddress::from_bytes([1u8; 32]));
/// let b = Token::with_wad_decimals(TokenAddress::from_bytes([2u8; 32]));
/// let request = SwapRequest::new(
///     SwapPath::single(a, b, CurveKind::ConstantProduct),
///     Amount::new(1_000),
///     AccountId::from_bytes([7u8; 32]),
/// )
/// .with_min_amount_out(Amount::new(900))
/// .with_deadline(Deadline::at(1_700_000_000));
/// assert_eq!(request.min_amount_out, Amount::new(900));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Route to trade along.
    pub path: SwapPath,
    /// Exact input paid by the caller.
    pub amount_in: Amount,
    /// Minimum acceptable final output.
    pub min_amount_out: Amount,
    /// Account credited with the output.
    pub recipient: AccountId,
    /// Latest execution time.
    pub deadline: Deadline,
}

impl SwapRequest {
    /// A request with no output minimum and no deadline.
    #[must_use]
    pub fn new(path: SwapPath, amount_in: Amount, recipient: AccountId) -> Self {
        Self {
            path,
            amount_in,
            min_amount_out: Amount::ZERO,
            recipient,
            deadline: Deadline::NEVER,
        }
    }

    /// Sets the minimum acceptable output.
    #[must_use]
    pub fn with_min_amount_out(mut self, min: Amount) -> Self {
        self.min_amount_out = min;
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }
}

/// A deposit into the pool for `(token_a, token_b, curve)`.
///
/// Amounts follow the request's own token order, which need not be the
/// pool's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddLiquidityRequest {
    /// First asset as named by the caller.
    pub token_a: Token,
    /// Second asset as named by the caller.
    pub token_b: Token,
    /// Curve of the target pool.
    pub curve: CurveKind,
    /// Most of `token_a` the caller will deposit.
    pub amount_a_desired: Amount,
    /// Most of `token_b` the caller will deposit.
    pub amount_b_desired: Amount,
    /// Least of `token_a` the caller accepts to deposit.
    pub amount_a_min: Amount,
    /// Least of `token_b` the caller accepts to deposit.
    pub amount_b_min: Amount,
    /// Account credited with the LP shares.
    pub recipient: AccountId,
    /// Latest execution time.
    pub deadline: Deadline,
}

impl AddLiquidityRequest {
    /// A request with zero minimums and no deadline.
    #[must_use]
    pub const fn new(
        token_a: Token,
        token_b: Token,
        curve: CurveKind,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        recipient: AccountId,
    ) -> Self {
        Self {
            token_a,
            token_b,
            curve,
            amount_a_desired,
            amount_b_desired,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient,
            deadline: Deadline::NEVER,
        }
    }

    /// Sets both minimum deposit amounts.
    #[must_use]
    pub const fn with_minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }
}

/// A withdrawal of `shares` from the pool for `(token_a, token_b, curve)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveLiquidityRequest {
    /// First asset as named by the caller.
    pub token_a: Token,
    /// Second asset as named by the caller.
    pub token_b: Token,
    /// Curve of the target pool.
    pub curve: CurveKind,
    /// LP shares to burn.
    pub shares: Shares,
    /// Least of `token_a` the caller accepts to receive.
    pub amount_a_min: Amount,
    /// Least of `token_b` the caller accepts to receive.
    pub amount_b_min: Amount,
    /// Account credited with both assets.
    pub recipient: AccountId,
    /// Latest execution time.
    pub deadline: Deadline,
}

impl RemoveLiquidityRequest {
    /// A request with zero minimums and no deadline.
    #[must_use]
    pub const fn new(
        token_a: Token,
        token_b: Token,
        curve: CurveKind,
        shares: Shares,
        recipient: AccountId,
    ) -> Self {
        Self {
            token_a,
            token_b,
            curve,
            shares,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient,
            deadline: Deadline::NEVER,
        }
    }

    /// Sets both minimum withdrawal amounts.
    #[must_use]
    pub const fn with_minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }
}
