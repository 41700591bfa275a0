use common::FixedI128;
use serde::{Deserialize, Serialize};

use super::address::Address;

/// Aggregate of all obligations of one owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPosition {
    pub owner: Address,
    pub obligations: u32,
    pub borrowed_in_quote: FixedI128,
    pub collateral_in_quote: FixedI128,
    pub ltv: FixedI128,
    pub health: FixedI128,
}

impl AccountPosition {
    pub fn empty(owner: Address) -> Self {
        Self {
            owner,
            obligations: 0,
            borrowed_in_quote: FixedI128::ZERO,
            collateral_in_quote: FixedI128::ZERO,
            ltv: FixedI128::ZERO,
            health: FixedI128::ZERO,
        }
    }
}
