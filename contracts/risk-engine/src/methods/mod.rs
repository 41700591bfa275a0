pub mod account_position;
pub mod borrow_quote;
pub mod borrowing_power;
pub mod enriched_obligations;
pub mod mid_price;
pub mod obligation_risk;
pub mod reserve_overview;
pub mod simulate_fill;
pub mod user_deposits;
pub mod utils;
