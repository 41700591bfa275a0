use common::FixedI128;
use lending_interface::types::reserve::Reserve;
use lending_interface::types::reserve_config::ReserveConfig;
use lending_interface::types::reserve_rates::ReserveRates;
use tracing::debug;

/// Returns utilization ratio
/// utilization = borrowed / (available + borrowed), zero for an empty pool
pub fn calc_utilization(available: u64, borrowed: u64) -> Option<FixedI128> {
    let total = i128::from(available).checked_add(i128::from(borrowed))?;

    if total == 0 {
        return Some(FixedI128::ZERO);
    }

    FixedI128::from_rational(borrowed, total)
}

/// Two segment borrow rate curve. The rate grows from min to optimal rate until
/// utilization reaches the optimal point and from optimal to max rate after it.
pub fn calc_borrow_rate(utilization: FixedI128, config: &ReserveConfig) -> Option<FixedI128> {
    let optimal_utilization = FixedI128::from_percent(config.optimal_utilization_rate)?;
    let optimal_rate = FixedI128::from_percent(config.optimal_borrow_rate)?;

    if optimal_utilization == FixedI128::ONE || utilization < optimal_utilization {
        let min_rate = FixedI128::from_percent(config.min_borrow_rate)?;
        let normalized = utilization.checked_div(optimal_utilization)?;

        normalized
            .checked_mul(optimal_rate.checked_sub(min_rate)?)?
            .checked_add(min_rate)
    } else {
        let max_rate = FixedI128::from_percent(config.max_borrow_rate)?;
        let normalized = utilization
            .checked_sub(optimal_utilization)?
            .checked_div(FixedI128::ONE.checked_sub(optimal_utilization)?)?;

        normalized
            .checked_mul(max_rate.checked_sub(optimal_rate)?)?
            .checked_add(optimal_rate)
    }
}

/// Depositors earn borrow interest in proportion to the lent out share of the pool
pub fn calc_deposit_rate(utilization: FixedI128, borrow_rate: FixedI128) -> Option<FixedI128> {
    utilization.checked_mul(borrow_rate)
}

/// Rates of a reserve, none when its config is inconsistent
pub fn calc_reserve_rates(reserve: &Reserve) -> Option<ReserveRates> {
    if let Err(err) = reserve.config.validate() {
        debug!(reserve = %reserve.address, code = err.code(), %err, "invalid reserve config");
        return None;
    }

    let utilization = calc_utilization(reserve.liquidity_available, reserve.borrowed_amount())?;
    let borrow_apy = calc_borrow_rate(utilization, &reserve.config)?;
    let deposit_apy = calc_deposit_rate(utilization, borrow_apy)?;

    Some(ReserveRates {
        utilization,
        borrow_apy,
        deposit_apy,
    })
}
