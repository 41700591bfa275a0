use std::cmp::Ordering;

use common::{FixedI128, WAD};
use lending_interface::types::reserve_config::ReserveConfig;
use lending_interface::types::reserve_rates::ReserveRates;
use proptest::prelude::*;

use crate::methods::utils::rate::{calc_borrow_rate, calc_reserve_rates, calc_utilization};

use super::sut::{init_sut, ratio, reserve, sol_config, usdc_config};

const MAX_LIQUIDITY: u64 = u64::MAX / 5;

#[test]
fn should_calc_rates_below_optimal_utilization() {
    let sut = init_sut();
    let rates = sut.engine().reserve_rates(&sut.usdc);

    assert_eq!(rates.utilization, ratio(2, 10));
    assert_eq!(rates.borrow_apy, ratio(1, 100));
    assert_eq!(rates.deposit_apy, ratio(2, 1000));
}

#[test]
fn should_calc_rates_at_optimal_utilization() {
    let reserve = reserve(900, 3600, 4500);
    let sut = init_sut();
    let engine = sut.engine();

    assert_eq!(engine.utilization(&reserve), ratio(8, 10));
    assert_eq!(engine.borrow_apy(&reserve), ratio(4, 100));
    assert_eq!(engine.deposit_apy(&reserve), ratio(32, 1000));
}

#[test]
fn should_calc_rates_above_optimal_utilization() {
    let utilization = ratio(9, 10);

    // 0.04 + (0.9 - 0.8) / (1 - 0.8) * (0.30 - 0.04)
    assert_eq!(
        calc_borrow_rate(utilization, &usdc_config()).unwrap(),
        ratio(17, 100)
    );
}

#[test]
fn should_use_min_rate_for_idle_reserve() {
    let sut = init_sut();
    let idle = reserve(1_000, 0, 1_000);
    let mut config = sol_config();
    config.min_borrow_rate = 2;

    assert_eq!(sut.engine().utilization(&idle), FixedI128::ZERO);
    assert_eq!(
        calc_borrow_rate(FixedI128::ZERO, &config).unwrap(),
        ratio(2, 100)
    );
}

#[test]
fn should_return_zero_utilization_for_empty_pool() {
    assert_eq!(calc_utilization(0, 0), Some(FixedI128::ZERO));

    let sut = init_sut();
    let rates = sut.engine().reserve_rates(&reserve(0, 0, 0));

    assert_eq!(rates.utilization, FixedI128::ZERO);
    assert_eq!(rates.borrow_apy, FixedI128::ZERO);
    assert_eq!(rates.deposit_apy, FixedI128::ZERO);
}

#[test]
fn should_use_max_rate_at_full_utilization() {
    assert_eq!(calc_utilization(0, 500), Some(FixedI128::ONE));
    assert_eq!(
        calc_borrow_rate(FixedI128::ONE, &usdc_config()).unwrap(),
        ratio(30, 100)
    );
}

#[test]
fn should_handle_optimal_utilization_at_bounds() {
    let mut config = usdc_config();

    config.optimal_utilization_rate = 100;
    assert_eq!(
        calc_borrow_rate(FixedI128::ONE, &config).unwrap(),
        ratio(4, 100)
    );

    config.optimal_utilization_rate = 0;
    assert_eq!(
        calc_borrow_rate(ratio(1, 2), &config).unwrap(),
        ratio(17, 100)
    );
}

#[test]
fn should_not_rate_reserve_with_invalid_config() {
    let sut = init_sut();
    let mut reserve = reserve(900, 3600, 4500);
    reserve.config.min_borrow_rate = 10;

    assert_eq!(calc_reserve_rates(&reserve), None);
    assert_eq!(sut.engine().reserve_rates(&reserve), ReserveRates::default());

    reserve.config = usdc_config();
    reserve.config.liquidation_threshold = reserve.config.loan_to_value_ratio;

    assert_eq!(calc_reserve_rates(&reserve), None);
    assert_eq!(sut.engine().borrow_apy(&reserve), FixedI128::ZERO);
}

// Creates rates (min, opt, max) where 0 <= min <= opt <= max <= MAX
prop_compose! {
    fn borrow_rates()(optimal_rate in 0..=u8::MAX)(
        min_rate in 0..=optimal_rate,
        optimal_rate in Just(optimal_rate),
        max_rate in optimal_rate..=u8::MAX,
    ) -> (u8, u8, u8) {
        (min_rate, optimal_rate, max_rate)
    }
}

proptest! {
    #[test]
    fn should_keep_rates_within_configured_bounds(
        total_liquidity in 0..=MAX_LIQUIDITY,
        borrowed_percent in 0..=WAD,
        optimal_utilization_rate in 0..=100u8,
        (min_borrow_rate, optimal_borrow_rate, max_borrow_rate) in borrow_rates(),
    ) {
        let borrowed = u64::try_from(u128::from(total_liquidity) * borrowed_percent / WAD).unwrap();
        let mut reserve = reserve(total_liquidity - borrowed, borrowed, total_liquidity);
        reserve.config = ReserveConfig {
            min_borrow_rate,
            optimal_borrow_rate,
            max_borrow_rate,
            optimal_utilization_rate,
            ..usdc_config()
        };

        let rates = calc_reserve_rates(&reserve).unwrap();

        prop_assert!(!rates.utilization.is_negative());
        prop_assert!(rates.utilization <= FixedI128::ONE);
        prop_assert!(rates.borrow_apy >= FixedI128::from_percent(min_borrow_rate).unwrap());
        prop_assert!(rates.borrow_apy <= FixedI128::from_percent(max_borrow_rate).unwrap());
        prop_assert!(!rates.deposit_apy.is_negative());
        prop_assert!(rates.deposit_apy <= rates.borrow_apy);

        let optimal_rate = FixedI128::from_percent(optimal_borrow_rate).unwrap();
        let optimal_utilization = FixedI128::from_percent(optimal_utilization_rate).unwrap();

        match rates.utilization.cmp(&optimal_utilization) {
            Ordering::Less => {
                if min_borrow_rate == optimal_borrow_rate {
                    prop_assert_eq!(rates.borrow_apy, optimal_rate);
                } else {
                    prop_assert!(rates.borrow_apy < optimal_rate);
                }
            }
            Ordering::Equal => prop_assert_eq!(rates.borrow_apy, optimal_rate),
            Ordering::Greater => prop_assert!(rates.borrow_apy >= optimal_rate),
        }
    }

    #[test]
    fn should_grow_borrow_rate_with_utilization(
        first in 0..=FixedI128::DENOMINATOR,
        second in 0..=FixedI128::DENOMINATOR,
        optimal_utilization_rate in 0..=100u8,
        (min_borrow_rate, optimal_borrow_rate, max_borrow_rate) in borrow_rates(),
    ) {
        let config = ReserveConfig {
            min_borrow_rate,
            optimal_borrow_rate,
            max_borrow_rate,
            optimal_utilization_rate,
            ..usdc_config()
        };
        let low = FixedI128::from_inner(first.min(second));
        let high = FixedI128::from_inner(first.max(second));

        let low_rate = calc_borrow_rate(low, &config).unwrap();
        let high_rate = calc_borrow_rate(high, &config).unwrap();

        prop_assert!(low_rate <= high_rate);
    }
}
