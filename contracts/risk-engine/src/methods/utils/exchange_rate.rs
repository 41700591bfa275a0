use common::FixedI128;
use lending_interface::types::reserve::Reserve;
use tracing::debug;

/// Returns collateral supply and market cap the conversions are based on.
/// An empty pool trades one to one.
fn exchange_terms(reserve: &Reserve) -> (u128, u128) {
    let supply = u128::from(reserve.collateral_mint_supply);
    let market_cap = reserve.market_cap();

    if market_cap == 0 {
        (1, 1)
    } else {
        (supply, market_cap)
    }
}

/// Returns collateral tokens minted per unit of liquidity
/// exchange_rate = collateral_mint_supply / (available + borrowed)
pub fn calc_exchange_rate(reserve: &Reserve) -> Option<FixedI128> {
    let (supply, market_cap) = exchange_terms(reserve);

    FixedI128::from_rational(i128::try_from(supply).ok()?, i128::try_from(market_cap).ok()?)
}

/// floor(collateral_amount / exchange_rate), zero while no collateral is minted
pub fn collateral_to_liquidity(reserve: &Reserve, collateral_amount: u64) -> Option<u64> {
    let (supply, market_cap) = exchange_terms(reserve);

    if supply == 0 {
        debug!(reserve = %reserve.address, "collateral supply is empty");
        return Some(0);
    }

    let liquidity = u128::from(collateral_amount)
        .checked_mul(market_cap)?
        .checked_div(supply)?;

    u64::try_from(liquidity).ok()
}

/// floor(liquidity_amount * exchange_rate)
pub fn liquidity_to_collateral(reserve: &Reserve, liquidity_amount: u64) -> Option<u64> {
    let (supply, market_cap) = exchange_terms(reserve);

    let collateral = u128::from(liquidity_amount)
        .checked_mul(supply)?
        .checked_div(market_cap)?;

    u64::try_from(collateral).ok()
}
