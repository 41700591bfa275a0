use common::FixedI128;
use serde::{Deserialize, Serialize};

/// Outcome of walking an order book with a market order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillResult {
    /// Accumulated cost of the filled part
    pub cost: FixedI128,
    /// Decimal adjusted amount that found liquidity
    pub filled: FixedI128,
    /// Decimal adjusted amount left after the book was exhausted
    pub remaining: FixedI128,
}

impl FillResult {
    pub fn is_partial(&self) -> bool {
        self.remaining.is_positive()
    }
}
