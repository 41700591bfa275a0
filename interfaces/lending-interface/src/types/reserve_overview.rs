use common::FixedI128;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::reserve_rates::ReserveRates;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveOverview {
    pub reserve: Address,
    pub rates: ReserveRates,
    pub exchange_rate: FixedI128,
    /// Decimal adjusted available plus borrowed liquidity
    pub total_liquidity: FixedI128,
    pub available_liquidity: FixedI128,
    pub borrowed_liquidity: FixedI128,
    pub total_liquidity_in_quote: FixedI128,
    pub max_ltv: FixedI128,
    pub liquidation_threshold: FixedI128,
    pub liquidation_penalty: FixedI128,
}
