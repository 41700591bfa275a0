use common::FixedI128;
use lending_interface::types::obligation::Obligation;
use lending_interface::types::risk_result::RiskResult;
use tracing::{debug, trace};

use crate::types::price_provider::PriceProvider;

use super::simulate_fill::simulate_market_order_fill;
use super::utils::exchange_rate::collateral_to_liquidity;

/// Returns None for obligations without debt or with unknown borrow reserve,
/// they carry no risk to report
pub fn calc_obligation_risk(
    price_provider: &mut PriceProvider,
    obligation: &Obligation,
) -> Option<RiskResult> {
    let borrowed = obligation.borrowed_amount();

    if borrowed == 0 {
        trace!(obligation = %obligation.address, "skipping obligation without debt");
        return None;
    }

    let snapshot = price_provider.snapshot();
    let config = price_provider.config();

    let Some(borrow_reserve) = snapshot.reserve(&obligation.borrow_reserve) else {
        debug!(
            obligation = %obligation.address,
            reserve = %obligation.borrow_reserve,
            "borrow reserve is not cached"
        );
        return None;
    };

    let liquidation_threshold = borrow_reserve.config.liquidation_threshold;

    let mut result = RiskResult {
        obligation: obligation.address,
        owner: obligation.owner,
        ltv: FixedI128::ZERO,
        health: FixedI128::ZERO,
        borrowed_in_quote: FixedI128::ZERO,
        collateral_in_quote: FixedI128::ZERO,
        borrowed_cross_priced: FixedI128::ZERO,
        collateral_in_liquidity: FixedI128::ZERO,
        liquidation_threshold,
    };

    let Some(borrow_mint) = snapshot.mint(&borrow_reserve.liquidity_mint) else {
        debug!(mint = %borrow_reserve.liquidity_mint, "borrow mint is not cached");
        return Some(result);
    };

    let collateral_reserve = snapshot.reserve(&obligation.collateral_reserve);

    result.collateral_in_liquidity = collateral_reserve
        .and_then(|reserve| {
            let amount = collateral_to_liquidity(reserve, obligation.deposited_collateral_amount)?;
            FixedI128::from_amount(amount, snapshot.mint_decimals(&reserve.liquidity_mint))
        })
        .unwrap_or(FixedI128::ZERO);

    let market = borrow_reserve
        .dex_market
        .or_else(|| collateral_reserve.and_then(|reserve| reserve.dex_market));

    result.borrowed_cross_priced = market
        .map(|market| {
            simulate_market_order_fill(snapshot, config, borrowed, borrow_reserve, &market, true).cost
        })
        .unwrap_or(FixedI128::ZERO);

    result.borrowed_in_quote = FixedI128::from_amount(borrowed, borrow_mint.decimals)
        .map(|amount| price_provider.convert_to_quote(&borrow_reserve.liquidity_mint, amount))
        .unwrap_or(FixedI128::ZERO);

    result.collateral_in_quote = collateral_reserve
        .map(|reserve| {
            price_provider.convert_to_quote(&reserve.liquidity_mint, result.collateral_in_liquidity)
        })
        .unwrap_or(FixedI128::ZERO);

    result.ltv = calc_ltv(result.borrowed_cross_priced, result.collateral_in_liquidity)
        .unwrap_or_else(|| {
            debug!(obligation = %obligation.address, "ltv is not computable");
            FixedI128::ZERO
        });

    result.health = calc_health(
        result.collateral_in_liquidity,
        result.borrowed_cross_priced,
        liquidation_threshold,
    )
    .unwrap_or_else(|| {
        debug!(obligation = %obligation.address, "health is not computable");
        FixedI128::ZERO
    });

    trace!(
        obligation = %obligation.address,
        ltv = %result.ltv,
        health = %result.health,
        "obligation evaluated"
    );

    Some(result)
}

/// ltv = 100 * debt / collateral
pub fn calc_ltv(debt: FixedI128, collateral: FixedI128) -> Option<FixedI128> {
    FixedI128::HUNDRED.checked_mul(debt)?.checked_div(collateral)
}

/// health = collateral * liquidation_threshold / 100 / debt
pub fn calc_health(
    collateral: FixedI128,
    debt: FixedI128,
    liquidation_threshold: u8,
) -> Option<FixedI128> {
    collateral
        .checked_mul(FixedI128::from_percent(liquidation_threshold)?)?
        .checked_div(debt)
}
