use common::wad_to_amount;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::reserve_config::ReserveConfig;

/// Lending pool of one liquidity token, parsed from a reserve account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserve {
    pub address: Address,
    pub lending_market: Address,
    pub liquidity_mint: Address,
    /// Liquidity which can be borrowed, in the smallest units of the liquidity mint
    pub liquidity_available: u64,
    /// Borrowed liquidity plus accrued interest, WAD scaled
    pub liquidity_borrowed_wad: u128,
    pub collateral_mint: Address,
    pub collateral_mint_supply: u64,
    /// Order book market used to price the liquidity mint
    pub dex_market: Option<Address>,
    pub config: ReserveConfig,
}

impl Reserve {
    /// Borrowed liquidity in the smallest units of the liquidity mint
    pub fn borrowed_amount(&self) -> u64 {
        wad_to_amount(self.liquidity_borrowed_wad)
    }

    /// Total liquidity, available plus lent out
    pub fn market_cap(&self) -> u128 {
        u128::from(self.liquidity_available) + u128::from(self.borrowed_amount())
    }
}
