#![deny(warnings)]

use common::FixedI128;
use lending_interface::types::{
    account_position::AccountPosition, address::Address, borrowing_power::BorrowingPower,
    engine_config::EngineConfig, fill_result::FillResult, market_snapshot::MarketSnapshot,
    obligation::Obligation, price_quote::PriceQuote, reserve::Reserve,
    reserve_overview::ReserveOverview, reserve_rates::ReserveRates, risk_result::RiskResult,
    user_deposit::UserDeposit,
};
use methods::{
    account_position::account_position,
    borrow_quote::{max_borrow_for_collateral, required_collateral_for_borrow},
    borrowing_power::borrowing_power,
    enriched_obligations::{enriched_obligations, liquidatable_obligations},
    obligation_risk::calc_obligation_risk,
    reserve_overview::reserve_overview,
    simulate_fill::simulate_market_order_fill,
    user_deposits::user_deposits,
    utils::{
        exchange_rate::{calc_exchange_rate, collateral_to_liquidity, liquidity_to_collateral},
        rate::calc_reserve_rates,
    },
};

pub use event::{Emitter, MarketEmitter, Subscription};
pub use methods::user_deposits::DepositFilter;
pub use scheduler::{AccountWatchlist, RecomputeScheduler, WatchHandle};
pub use types::price_provider::PriceProvider;

mod event;
mod methods;
mod scheduler;
#[cfg(test)]
mod tests;
mod types;

/// Read-only pricing and risk figures computed from one snapshot.
///
/// All operations are total. Degenerate inputs such as an empty pool, a missing
/// order book or a zero collateral resolve to zero instead of failing.
pub struct RiskEngine<'a> {
    snapshot: &'a MarketSnapshot,
    config: &'a EngineConfig,
}

impl<'a> RiskEngine<'a> {
    pub fn new(snapshot: &'a MarketSnapshot, config: &'a EngineConfig) -> Self {
        Self { snapshot, config }
    }

    pub fn snapshot(&self) -> &'a MarketSnapshot {
        self.snapshot
    }

    fn price_provider(&self) -> PriceProvider<'a> {
        PriceProvider::new(self.snapshot, self.config)
    }

    pub fn reserve_rates(&self, reserve: &Reserve) -> ReserveRates {
        calc_reserve_rates(reserve).unwrap_or_default()
    }

    pub fn utilization(&self, reserve: &Reserve) -> FixedI128 {
        self.reserve_rates(reserve).utilization
    }

    pub fn borrow_apy(&self, reserve: &Reserve) -> FixedI128 {
        self.reserve_rates(reserve).borrow_apy
    }

    pub fn deposit_apy(&self, reserve: &Reserve) -> FixedI128 {
        self.reserve_rates(reserve).deposit_apy
    }

    pub fn exchange_rate(&self, reserve: &Reserve) -> FixedI128 {
        calc_exchange_rate(reserve).unwrap_or(FixedI128::ONE)
    }

    /// Saturates at `u64::MAX` when the liquidity does not fit the amount type
    pub fn collateral_to_liquidity(&self, reserve: &Reserve, collateral_amount: u64) -> u64 {
        collateral_to_liquidity(reserve, collateral_amount).unwrap_or(u64::MAX)
    }

    /// Saturates at `u64::MAX` when the collateral does not fit the amount type
    pub fn liquidity_to_collateral(&self, reserve: &Reserve, liquidity_amount: u64) -> u64 {
        liquidity_to_collateral(reserve, liquidity_amount).unwrap_or(u64::MAX)
    }

    pub fn mid_price(&self, mint: &Address) -> PriceQuote {
        self.price_provider().mid_price(mint)
    }

    pub fn simulate_market_order_fill(
        &self,
        amount: u64,
        reserve: &Reserve,
        market: &Address,
        use_bbo: bool,
    ) -> FillResult {
        simulate_market_order_fill(self.snapshot, self.config, amount, reserve, market, use_bbo)
    }

    pub fn obligation_risk(&self, obligation: &Obligation) -> Option<RiskResult> {
        calc_obligation_risk(&mut self.price_provider(), obligation)
    }

    pub fn enriched_obligations(&self) -> Vec<RiskResult> {
        enriched_obligations(&mut self.price_provider())
    }

    pub fn liquidatable_obligations(&self) -> Vec<RiskResult> {
        liquidatable_obligations(&mut self.price_provider())
    }

    pub fn account_position(&self, owner: &Address) -> AccountPosition {
        account_position(&mut self.price_provider(), owner)
    }

    pub fn user_deposits(&self, owner: &Address, filter: &DepositFilter) -> Vec<UserDeposit> {
        user_deposits(&mut self.price_provider(), owner, filter)
    }

    pub fn borrowing_power(&self, owner: &Address, reserve: &Address) -> BorrowingPower {
        borrowing_power(&mut self.price_provider(), owner, reserve)
    }

    pub fn max_borrow_for_collateral(
        &self,
        borrow_reserve: &Address,
        collateral_reserve: &Address,
        collateral_amount: FixedI128,
    ) -> FixedI128 {
        max_borrow_for_collateral(
            &mut self.price_provider(),
            borrow_reserve,
            collateral_reserve,
            collateral_amount,
        )
    }

    pub fn required_collateral_for_borrow(
        &self,
        borrow_reserve: &Address,
        collateral_reserve: &Address,
        borrow_amount: FixedI128,
    ) -> FixedI128 {
        required_collateral_for_borrow(
            &mut self.price_provider(),
            borrow_reserve,
            collateral_reserve,
            borrow_amount,
        )
    }

    pub fn reserve_overview(&self, reserve: &Address) -> Option<ReserveOverview> {
        reserve_overview(&mut self.price_provider(), reserve)
    }
}
