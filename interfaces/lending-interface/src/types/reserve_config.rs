use common::{PERCENT_DENOMINATOR, WAD};
use serde::{Deserialize, Serialize};

use super::error::Error;

/// Reserve configuration. Rates are integer percentages, 1% - 1, 100% - 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveConfig {
    /// Utilization at which the borrow rate curve kinks
    pub optimal_utilization_rate: u8,
    /// Max share of collateral value that can be borrowed
    pub loan_to_value_ratio: u8,
    /// Bonus a liquidator receives on top of repaid value
    pub liquidation_bonus: u8,
    /// Share of collateral value at which a position becomes liquidatable
    pub liquidation_threshold: u8,
    pub min_borrow_rate: u8,
    pub optimal_borrow_rate: u8,
    pub max_borrow_rate: u8,
    /// Borrow fee expressed as WAD fraction
    pub borrow_fee_wad: u64,
    /// Share of the borrow fee paid to the host
    pub host_fee_percentage: u8,
}

impl ReserveConfig {
    pub fn validate(&self) -> Result<(), Error> {
        let denom = PERCENT_DENOMINATOR as u8;

        if self.optimal_utilization_rate > denom
            || self.liquidation_bonus > denom
            || self.host_fee_percentage > denom
        {
            return Err(Error::MustBeLtePercentDenominator);
        }

        if self.loan_to_value_ratio >= denom {
            return Err(Error::MustBeLtPercentDenominator);
        }

        if self.liquidation_threshold <= self.loan_to_value_ratio
            || self.liquidation_threshold > denom
        {
            return Err(Error::InvalidLiquidationThreshold);
        }

        if self.min_borrow_rate > self.optimal_borrow_rate
            || self.optimal_borrow_rate > self.max_borrow_rate
        {
            return Err(Error::InvalidBorrowRates);
        }

        if u128::from(self.borrow_fee_wad) >= WAD {
            return Err(Error::InvalidBorrowFee);
        }

        Ok(())
    }
}
