use common::FixedI128;
use serde::{Deserialize, Serialize};

/// Rates of a reserve expressed as fractions, 1.0 - 100%
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveRates {
    pub utilization: FixedI128,
    pub borrow_apy: FixedI128,
    pub deposit_apy: FixedI128,
}
