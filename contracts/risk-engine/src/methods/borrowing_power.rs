use std::collections::BTreeSet;

use common::FixedI128;
use lending_interface::types::address::Address;
use lending_interface::types::borrowing_power::BorrowingPower;
use tracing::debug;

use crate::types::price_provider::PriceProvider;

use super::account_position::account_position;
use super::user_deposits::{total_in_quote, user_deposits, DepositFilter};

/// Amount of `reserve` liquidity the deposits of `owner` could back.
///
/// Deposits into the reserve itself are not counted. Until cross collateral is
/// supported a non quote reserve can only be borrowed against the quote reserve.
pub fn borrowing_power(
    price_provider: &mut PriceProvider,
    owner: &Address,
    reserve: &Address,
) -> BorrowingPower {
    let snapshot = price_provider.snapshot();

    let Some(reserve) = snapshot.reserve(reserve) else {
        debug!(%reserve, "reserve is not cached");
        return BorrowingPower::default();
    };

    let quote_mint = snapshot
        .lending_market(&reserve.lending_market)
        .map(|market| market.quote_mint);
    let is_quote_reserve = quote_mint == Some(reserve.liquidity_mint);

    let include = quote_mint
        .filter(|_| !is_quote_reserve)
        .and_then(|mint| snapshot.reserve_by_liquidity_mint(&mint))
        .map(|quote_reserve| BTreeSet::from([quote_reserve.address]));

    let filter = DepositFilter {
        exclude: BTreeSet::from([reserve.address]),
        include,
    };

    let deposits = user_deposits(price_provider, owner, &filter);
    let total_in_quote = total_in_quote(&deposits);
    let loans_value = account_position(price_provider, owner).borrowed_in_quote;

    let utilization = loans_value
        .checked_add(total_in_quote)
        .filter(|total| !total.is_zero())
        .and_then(|total| loans_value.checked_div(total))
        .unwrap_or(FixedI128::ZERO);

    let borrowing_power = if is_quote_reserve {
        total_in_quote
    } else {
        let price = price_provider.mid_price(&reserve.liquidity_mint).price;
        total_in_quote.checked_div(price).unwrap_or(FixedI128::ZERO)
    };

    BorrowingPower {
        borrowing_power,
        total_in_quote,
        utilization,
    }
}
