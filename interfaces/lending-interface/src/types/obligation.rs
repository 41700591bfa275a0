use common::wad_to_amount;
use serde::{Deserialize, Serialize};

use super::address::Address;

/// Borrower position with a single collateral reserve and a single borrow reserve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    pub address: Address,
    pub owner: Address,
    pub collateral_reserve: Address,
    pub borrow_reserve: Address,
    /// Amount of collateral tokens deposited
    pub deposited_collateral_amount: u64,
    /// Borrowed liquidity plus interest, WAD scaled
    pub borrowed_amount_wad: u128,
}

impl Obligation {
    /// Borrowed liquidity in the smallest units of the borrow reserve liquidity mint
    pub fn borrowed_amount(&self) -> u64 {
        wad_to_amount(self.borrowed_amount_wad)
    }

    pub fn has_debt(&self) -> bool {
        self.borrowed_amount() > 0
    }
}
