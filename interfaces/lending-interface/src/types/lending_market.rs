use serde::{Deserialize, Serialize};

use super::address::Address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingMarket {
    pub address: Address,
    /// Mint every reserve of the market is quoted in
    pub quote_mint: Address,
}
