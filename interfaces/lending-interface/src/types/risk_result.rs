use common::FixedI128;
use serde::{Deserialize, Serialize};

use super::address::Address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub obligation: Address,
    pub owner: Address,
    /// Debt as percentage of collateral, 100.0 - 100%
    pub ltv: FixedI128,
    /// Discounted collateral over debt, below 1.0 the position is liquidatable
    pub health: FixedI128,
    /// Debt value in quote currency at mid price
    pub borrowed_in_quote: FixedI128,
    /// Collateral value in quote currency at mid price
    pub collateral_in_quote: FixedI128,
    /// Debt expressed in collateral terms
    pub borrowed_cross_priced: FixedI128,
    /// Decimal adjusted collateral expressed in underlying liquidity
    pub collateral_in_liquidity: FixedI128,
    /// Integer percentage used to discount collateral
    pub liquidation_threshold: u8,
}

impl RiskResult {
    /// Debt could be priced and discounted collateral doesn't cover it
    pub fn is_liquidatable(&self) -> bool {
        self.borrowed_cross_priced.is_positive() && self.health < FixedI128::ONE
    }
}
