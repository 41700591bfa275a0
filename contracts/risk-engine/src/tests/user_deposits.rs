use std::collections::BTreeSet;

use common::FixedI128;
use lending_interface::types::address::Address;

use crate::methods::user_deposits::total_in_quote;
use crate::DepositFilter;

use super::sut::{fixed, init_sut, ratio, ONE_SOL, ONE_USDC};

#[test]
fn should_value_collateral_accounts() {
    let mut sut = init_sut();
    let (usdc, sol) = (sut.usdc.clone(), sut.sol.clone());
    let owner = Address::generate();

    let usdc_account = sut.deposit(owner, &usdc, 500 * ONE_USDC);
    let sol_account = sut.deposit(owner, &sol, 2 * ONE_SOL);
    sut.deposit(Address::generate(), &usdc, 700 * ONE_USDC);

    let deposits = sut.engine().user_deposits(&owner, &DepositFilter::default());
    assert_eq!(deposits.len(), 2);

    let usdc_deposit = deposits.iter().find(|d| d.account == usdc_account).unwrap();
    assert_eq!(usdc_deposit.reserve, usdc.address);
    assert_eq!(usdc_deposit.amount, fixed(500));
    assert_eq!(usdc_deposit.amount_in_quote, fixed(500));
    assert_eq!(usdc_deposit.apy, ratio(2, 1000));

    let sol_deposit = deposits.iter().find(|d| d.account == sol_account).unwrap();
    assert_eq!(sol_deposit.reserve, sol.address);
    assert_eq!(sol_deposit.amount, fixed(2));
    assert_eq!(sol_deposit.amount_in_quote, fixed(200));
    // utilization 0.1, borrow rate 0.01875
    assert_eq!(sol_deposit.apy, ratio(1_875, 1_000_000));

    assert_eq!(total_in_quote(&deposits), fixed(700));
}

#[test]
fn should_ignore_non_collateral_accounts() {
    let mut sut = init_sut();
    let owner = Address::generate();
    let mut unrelated = sut.usdc.clone();
    unrelated.collateral_mint = Address::generate();

    sut.deposit(owner, &unrelated, ONE_USDC);

    assert!(sut
        .engine()
        .user_deposits(&owner, &DepositFilter::default())
        .is_empty());
}

#[test]
fn should_apply_deposit_filter() {
    let mut sut = init_sut();
    let (usdc, sol) = (sut.usdc.clone(), sut.sol.clone());
    let owner = Address::generate();

    sut.deposit(owner, &usdc, 500 * ONE_USDC);
    sut.deposit(owner, &sol, 2 * ONE_SOL);

    let excluding_sol = DepositFilter {
        exclude: BTreeSet::from([sol.address]),
        include: None,
    };
    let deposits = sut.engine().user_deposits(&owner, &excluding_sol);
    assert_eq!(deposits.len(), 1);
    assert_eq!(deposits[0].reserve, usdc.address);

    let only_sol = DepositFilter {
        exclude: BTreeSet::new(),
        include: Some(BTreeSet::from([sol.address])),
    };
    let deposits = sut.engine().user_deposits(&owner, &only_sol);
    assert_eq!(deposits.len(), 1);
    assert_eq!(deposits[0].reserve, sol.address);

    assert_eq!(total_in_quote(&[]), FixedI128::ZERO);
}
