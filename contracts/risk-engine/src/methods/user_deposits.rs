use std::collections::BTreeSet;

use common::FixedI128;
use lending_interface::types::address::Address;
use lending_interface::types::user_deposit::UserDeposit;

use crate::types::price_provider::PriceProvider;

use super::utils::exchange_rate::collateral_to_liquidity;
use super::utils::rate::calc_reserve_rates;

/// Selects reserves deposits are collected from
#[derive(Debug, Clone, Default)]
pub struct DepositFilter {
    pub exclude: BTreeSet<Address>,
    /// When set, only these reserves are counted
    pub include: Option<BTreeSet<Address>>,
}

impl DepositFilter {
    pub fn allows(&self, reserve: &Address) -> bool {
        !self.exclude.contains(reserve)
            && self
                .include
                .as_ref()
                .map_or(true, |include| include.contains(reserve))
    }
}

/// Collateral token accounts of `owner` valued in underlying liquidity and quote currency
pub fn user_deposits(
    price_provider: &mut PriceProvider,
    owner: &Address,
    filter: &DepositFilter,
) -> Vec<UserDeposit> {
    let snapshot = price_provider.snapshot();

    snapshot
        .token_accounts_of(owner)
        .filter_map(|account| {
            let reserve = snapshot.reserve_by_collateral_mint(&account.mint)?;

            if !filter.allows(&reserve.address) {
                return None;
            }

            let amount = collateral_to_liquidity(reserve, account.amount)
                .and_then(|liquidity| {
                    FixedI128::from_amount(
                        liquidity,
                        snapshot.mint_decimals(&reserve.liquidity_mint),
                    )
                })
                .unwrap_or(FixedI128::ZERO);

            let amount_in_quote = price_provider.convert_to_quote(&reserve.liquidity_mint, amount);

            let apy = calc_reserve_rates(reserve)
                .map(|rates| rates.deposit_apy)
                .unwrap_or(FixedI128::ZERO);

            Some(UserDeposit {
                account: account.address,
                reserve: reserve.address,
                amount,
                amount_in_quote,
                apy,
            })
        })
        .collect()
}

pub fn total_in_quote(deposits: &[UserDeposit]) -> FixedI128 {
    deposits
        .iter()
        .try_fold(FixedI128::ZERO, |acc, deposit| acc.checked_add(deposit.amount_in_quote))
        .unwrap_or(FixedI128::ZERO)
}
