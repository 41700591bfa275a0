use common::FixedI128;
use lending_interface::types::address::Address;

use crate::types::price_provider::PriceProvider;

/// Prices and max ltv needed to convert between collateral and borrow amounts
struct QuoteTerms {
    collateral_price: FixedI128,
    borrow_price: FixedI128,
    ltv: FixedI128,
}

fn quote_terms(
    price_provider: &mut PriceProvider,
    borrow_reserve: &Address,
    collateral_reserve: &Address,
) -> Option<QuoteTerms> {
    let snapshot = price_provider.snapshot();
    let borrow_reserve = snapshot.reserve(borrow_reserve)?;
    let collateral_reserve = snapshot.reserve(collateral_reserve)?;

    Some(QuoteTerms {
        collateral_price: price_provider
            .mid_price(&collateral_reserve.liquidity_mint)
            .price,
        borrow_price: price_provider.mid_price(&borrow_reserve.liquidity_mint).price,
        ltv: FixedI128::from_percent(borrow_reserve.config.loan_to_value_ratio)?,
    })
}

/// Max decimal adjusted amount which can be borrowed against `collateral_amount`
/// borrow = collateral * collateral_price * ltv / borrow_price
pub fn max_borrow_for_collateral(
    price_provider: &mut PriceProvider,
    borrow_reserve: &Address,
    collateral_reserve: &Address,
    collateral_amount: FixedI128,
) -> FixedI128 {
    quote_terms(price_provider, borrow_reserve, collateral_reserve)
        .and_then(|terms| {
            collateral_amount
                .checked_mul(terms.collateral_price)?
                .checked_mul(terms.ltv)?
                .checked_div(terms.borrow_price)
        })
        .unwrap_or(FixedI128::ZERO)
}

/// Decimal adjusted collateral needed to borrow `borrow_amount`
/// collateral = borrow * borrow_price / ltv / collateral_price
pub fn required_collateral_for_borrow(
    price_provider: &mut PriceProvider,
    borrow_reserve: &Address,
    collateral_reserve: &Address,
    borrow_amount: FixedI128,
) -> FixedI128 {
    quote_terms(price_provider, borrow_reserve, collateral_reserve)
        .and_then(|terms| {
            borrow_amount
                .checked_mul(terms.borrow_price)?
                .checked_div(terms.ltv)?
                .checked_div(terms.collateral_price)
        })
        .unwrap_or(FixedI128::ZERO)
}
