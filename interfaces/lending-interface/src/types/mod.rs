pub mod account_position;
pub mod address;
pub mod borrowing_power;
pub mod engine_config;
pub mod error;
pub mod fill_result;
pub mod lending_market;
pub mod market_event;
pub mod market_snapshot;
pub mod mint_info;
pub mod obligation;
pub mod order_book;
pub mod price_quote;
pub mod reserve;
pub mod reserve_config;
pub mod reserve_overview;
pub mod reserve_rates;
pub mod risk_result;
pub mod token_account;
pub mod user_deposit;
