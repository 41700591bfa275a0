use common::FixedI128;
use lending_interface::types::address::Address;
use lending_interface::types::reserve_overview::ReserveOverview;

use crate::types::price_provider::PriceProvider;

use super::utils::exchange_rate::calc_exchange_rate;
use super::utils::rate::calc_reserve_rates;

pub fn reserve_overview(
    price_provider: &mut PriceProvider,
    reserve: &Address,
) -> Option<ReserveOverview> {
    let snapshot = price_provider.snapshot();
    let reserve = snapshot.reserve(reserve)?;
    let decimals = snapshot.mint_decimals(&reserve.liquidity_mint);
    let config = &reserve.config;

    let available_liquidity =
        FixedI128::from_amount(reserve.liquidity_available, decimals).unwrap_or_default();
    let borrowed_liquidity =
        FixedI128::from_amount(reserve.borrowed_amount(), decimals).unwrap_or_default();
    let total_liquidity = available_liquidity
        .checked_add(borrowed_liquidity)
        .unwrap_or_default();

    Some(ReserveOverview {
        reserve: reserve.address,
        rates: calc_reserve_rates(reserve).unwrap_or_default(),
        exchange_rate: calc_exchange_rate(reserve).unwrap_or_default(),
        total_liquidity,
        available_liquidity,
        borrowed_liquidity,
        total_liquidity_in_quote: price_provider
            .convert_to_quote(&reserve.liquidity_mint, total_liquidity),
        max_ltv: FixedI128::from_percent(config.loan_to_value_ratio).unwrap_or_default(),
        liquidation_threshold: FixedI128::from_percent(config.liquidation_threshold)
            .unwrap_or_default(),
        liquidation_penalty: FixedI128::from_percent(config.liquidation_bonus)
            .unwrap_or_default(),
    })
}
