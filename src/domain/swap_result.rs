//! Outcomes of pool operations.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Shares};

/// The outcome of a single-pool swap.
///
/// `fee` is the part of `amount_in` retained by the pool as LP revenue;
/// `amount_in - fee` is what the curve priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapResult {
    /// Gross input paid into the pool.
    pub amount_in: Amount,
    /// Output paid out of the pool.
    pub amount_out: Amount,
    /// Fee charged on the input.
    pub fee: Amount,
}

impl SwapResult {
    /// Input that reached the curve after the fee.
    pub fn net_in(&self) -> Amount {
        Amount::new(self.amount_in.get().saturating_sub(self.fee.get()))
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "in={} out={} fee={}",
            self.amount_in, self.amount_out, self.fee
        )
    }
}

/// The outcome of a mint.
///
/// `amount_a`/`amount_b` follow the pool's canonical order and are the
/// amounts actually consumed, which may be less than supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MintResult {
    /// Consumed amount of the first token.
    pub amount_a: Amount,
    /// Consumed amount of the second token.
    pub amount_b: Amount,
    /// Shares issued to the depositor.
    pub shares: Shares,
    /// Shares permanently locked by this mint (non-zero only on the first).
    pub locked: Shares,
}

/// The outcome of a burn, in the pool's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BurnResult {
    /// Amount of the first token released.
    pub amount_a: Amount,
    /// Amount of the second token released.
    pub amount_b: Amount,
}
