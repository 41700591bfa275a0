
mod obligation_risk;
mod rates;
mod user_deposits;
