use common::FixedI128;
use lending_interface::types::account_position::AccountPosition;
use lending_interface::types::address::Address;

use crate::types::price_provider::PriceProvider;

use super::obligation_risk::{calc_health, calc_ltv, calc_obligation_risk};

/// Aggregates all obligations of `owner`. A single obligation reports its own ltv
/// and health, several obligations are combined by their quote currency values.
pub fn account_position(price_provider: &mut PriceProvider, owner: &Address) -> AccountPosition {
    let snapshot = price_provider.snapshot();

    let results: Vec<_> = snapshot
        .obligations_of(owner)
        .filter_map(|obligation| calc_obligation_risk(price_provider, obligation))
        .collect();

    let mut position = AccountPosition::empty(*owner);
    let mut liquidation_threshold = 0;

    for result in &results {
        position.borrowed_in_quote = position
            .borrowed_in_quote
            .checked_add(result.borrowed_in_quote)
            .unwrap_or(position.borrowed_in_quote);
        position.collateral_in_quote = position
            .collateral_in_quote
            .checked_add(result.collateral_in_quote)
            .unwrap_or(position.collateral_in_quote);
        liquidation_threshold = result.liquidation_threshold;
    }

    position.obligations = u32::try_from(results.len()).unwrap_or(u32::MAX);

    match results.as_slice() {
        [] => {}
        [single] => {
            position.ltv = single.ltv;
            position.health = single.health;
        }
        _ => {
            position.ltv = calc_ltv(position.borrowed_in_quote, position.collateral_in_quote)
                .unwrap_or(FixedI128::ZERO);
            position.health = calc_health(
                position.collateral_in_quote,
                position.borrowed_in_quote,
                liquidation_threshold,
            )
            .unwrap_or(FixedI128::ZERO);
        }
    }

    position
}
