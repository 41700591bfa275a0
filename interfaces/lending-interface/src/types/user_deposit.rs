use common::FixedI128;
use serde::{Deserialize, Serialize};

use super::address::Address;

/// Collateral tokens held by a user valued in underlying liquidity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDeposit {
    pub account: Address,
    pub reserve: Address,
    /// Decimal adjusted underlying liquidity
    pub amount: FixedI128,
    pub amount_in_quote: FixedI128,
    pub apy: FixedI128,
}
