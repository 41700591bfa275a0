use serde::{Deserialize, Serialize};

use super::address::Address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintInfo {
    pub address: Address,
    pub decimals: u8,
    /// Registered token symbol, e.g. USDC
    pub symbol: Option<String>,
}
