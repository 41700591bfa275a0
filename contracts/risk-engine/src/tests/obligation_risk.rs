use common::FixedI128;
use lending_interface::types::address::Address;

use crate::methods::obligation_risk::{calc_health, calc_ltv};

use super::sut::{fixed, init_sut, obligation, ratio, ONE_SOL, ONE_USDC};

#[test]
fn should_evaluate_sol_debt_against_usdc_collateral() {
    let mut sut = init_sut();
    let (usdc, sol) = (sut.usdc.clone(), sut.sol.clone());
    let owner = Address::generate();
    let obligation = sut.borrow(owner, &usdc, 200 * ONE_USDC, &sol, ONE_SOL);

    let result = sut.engine().obligation_risk(&obligation).unwrap();

    assert_eq!(result.obligation, obligation.address);
    assert_eq!(result.owner, owner);
    assert_eq!(result.collateral_in_liquidity, fixed(200));
    assert_eq!(result.borrowed_cross_priced, fixed(100));
    assert_eq!(result.ltv, fixed(50));
    assert_eq!(result.health, ratio(16, 10));
    assert_eq!(result.borrowed_in_quote, fixed(100));
    assert_eq!(result.collateral_in_quote, fixed(200));
    assert_eq!(result.liquidation_threshold, 80);
    assert!(!result.is_liquidatable());
}

#[test]
fn should_evaluate_usdc_debt_against_sol_collateral() {
    let mut sut = init_sut();
    let (usdc, sol) = (sut.usdc.clone(), sut.sol.clone());
    let obligation = sut.borrow(Address::generate(), &sol, ONE_SOL, &usdc, 50 * ONE_USDC);

    let result = sut.engine().obligation_risk(&obligation).unwrap();

    // usdc reserve has no market, the collateral reserve market is used
    assert_eq!(result.borrowed_cross_priced, ratio(1, 2));
    assert_eq!(result.collateral_in_liquidity, FixedI128::ONE);
    assert_eq!(result.ltv, fixed(50));
    // threshold of the borrow reserve: 1 * 0.85 / 0.5
    assert_eq!(result.health, ratio(17, 10));
    assert_eq!(result.borrowed_in_quote, fixed(50));
    assert_eq!(result.collateral_in_quote, fixed(100));
}

#[test]
fn should_flag_undercollateralized_obligation() {
    let mut sut = init_sut();
    let (usdc, sol) = (sut.usdc.clone(), sut.sol.clone());
    let obligation = sut.borrow(Address::generate(), &usdc, 100 * ONE_USDC, &sol, ONE_SOL);

    let result = sut.engine().obligation_risk(&obligation).unwrap();

    assert_eq!(result.ltv, fixed(100));
    assert_eq!(result.health, ratio(8, 10));
    assert!(result.is_liquidatable());
}

#[test]
fn should_skip_obligation_without_debt() {
    let mut sut = init_sut();
    let (usdc, sol) = (sut.usdc.clone(), sut.sol.clone());
    let obligation = sut.borrow(Address::generate(), &usdc, 100 * ONE_USDC, &sol, 0);

    assert_eq!(sut.engine().obligation_risk(&obligation), None);
}

#[test]
fn should_skip_obligation_with_unknown_borrow_reserve() {
    let sut = init_sut();
    let mut unknown = sut.sol.clone();
    unknown.address = Address::generate();
    let obligation = obligation(Address::generate(), &sut.usdc, ONE_USDC, &unknown, ONE_SOL);

    assert_eq!(sut.engine().obligation_risk(&obligation), None);
}

#[test]
fn should_guard_zero_collateral() {
    let mut sut = init_sut();
    let (usdc, sol) = (sut.usdc.clone(), sut.sol.clone());
    let obligation = sut.borrow(Address::generate(), &usdc, 0, &sol, ONE_SOL);

    let result = sut.engine().obligation_risk(&obligation).unwrap();

    assert_eq!(result.ltv, FixedI128::ZERO);
    assert_eq!(result.health, FixedI128::ZERO);
    assert!(result.is_liquidatable());
}

#[test]
fn should_guard_unpriceable_debt() {
    let mut sut = init_sut();
    let (usdc, mut sol) = (sut.usdc.clone(), sut.sol.clone());
    sol.dex_market = None;
    sut.snapshot.insert_reserve(sol.clone());
    let obligation = sut.borrow(Address::generate(), &usdc, 100 * ONE_USDC, &sol, ONE_SOL);

    let result = sut.engine().obligation_risk(&obligation).unwrap();

    assert_eq!(result.borrowed_cross_priced, FixedI128::ZERO);
    assert_eq!(result.ltv, FixedI128::ZERO);
    assert_eq!(result.health, FixedI128::ZERO);
    assert!(!result.is_liquidatable());
    // quote figures still use the mid price
    assert_eq!(result.borrowed_in_quote, fixed(100));
}

#[test]
fn should_not_improve_health_when_debt_grows() {
    let collateral = fixed(1_000);
    let mut prev = calc_health(collateral, fixed(1), 80).unwrap();

    for debt in 2..200 {
        let health = calc_health(collateral, fixed(debt), 80).unwrap();
        assert!(health <= prev);
        prev = health;
    }

    assert_eq!(calc_ltv(fixed(1), FixedI128::ZERO), None);
    assert_eq!(calc_health(collateral, FixedI128::ZERO, 80), None);
}
