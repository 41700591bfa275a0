use common::FixedI128;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowingPower {
    /// Amount of the reserve liquidity that deposits could back
    pub borrowing_power: FixedI128,
    /// Deposits counted towards borrowing power, in quote currency
    pub total_in_quote: FixedI128,
    /// Loans over loans plus deposits
    pub utilization: FixedI128,
}
