//! Multi-hop quote.

use serde::{Deserialize, Serialize};

use super::Amount;

/// Amounts along a path: `amounts()[0]` is the input and `amounts()[i + 1]`
/// the output of hop `i`.
///
/// Produced by [`Router::quote`](crate::router::Router::quote) without
/// mutating any pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    amounts: Vec<Amount>,
}

impl Quote {
    pub(crate) fn new(amounts: Vec<Amount>) -> Self {
        Self { amounts }
    }

    /// Every node amount along the path.
    #[must_use]
    pub fn amounts(&self) -> &[Amount] {
        &self.amounts
    }

    /// The input amount.
    pub fn amount_in(&self) -> Amount {
        self.amounts.first().copied().unwrap_or(Amount::ZERO)
    }

    /// The final output amount.
    pub fn amount_out(&self) -> Amount {
        self.amounts.last().copied().unwrap_or(Amount::ZERO)
    }

    /// Number of hops quoted.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.amounts.len().saturating_sub(1)
    }
}
