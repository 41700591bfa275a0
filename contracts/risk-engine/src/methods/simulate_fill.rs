use common::FixedI128;
use lending_interface::types::address::Address;
use lending_interface::types::engine_config::EngineConfig;
use lending_interface::types::fill_result::FillResult;
use lending_interface::types::market_snapshot::MarketSnapshot;
use lending_interface::types::order_book::BookSide;
use lending_interface::types::reserve::Reserve;
use tracing::{debug, warn};

use super::mid_price::calc_bbo;
use super::utils::book_walk::{apply_price, walk_book};

/// Simulates a market order of `amount` smallest units of the reserve liquidity on `market`.
///
/// The bids book is used when the reserve liquidity is the lending market quote mint,
/// the asks book otherwise. With `use_bbo` the whole amount is priced at the mid of best
/// bid and best ask, otherwise the book is walked level by level.
///
/// Missing mints, market or book yield an empty fill.
pub fn simulate_market_order_fill(
    snapshot: &MarketSnapshot,
    config: &EngineConfig,
    amount: u64,
    reserve: &Reserve,
    market: &Address,
    use_bbo: bool,
) -> FillResult {
    let (Some(liquidity_mint), Some(_)) = (
        snapshot.mint(&reserve.liquidity_mint),
        snapshot.mint(&reserve.collateral_mint),
    ) else {
        debug!(reserve = %reserve.address, "reserve mints are not cached");
        return FillResult::default();
    };

    let Some(book) = snapshot.order_book(market) else {
        debug!(%market, "order book is not cached");
        return FillResult::default();
    };

    let Some(lending_market) = snapshot.lending_market(&reserve.lending_market) else {
        debug!(lending_market = %reserve.lending_market, "lending market is not cached");
        return FillResult::default();
    };

    let Some(remaining) = FixedI128::from_amount(amount, liquidity_mint.decimals) else {
        debug!(amount, decimals = liquidity_mint.decimals, "amount can not be decimal adjusted");
        return FillResult::default();
    };

    let side = if lending_market.quote_mint == reserve.liquidity_mint {
        BookSide::Bids
    } else {
        BookSide::Asks
    };

    let fill = if use_bbo {
        match calc_bbo(book).and_then(|bbo| apply_price(side, bbo, remaining)) {
            Some(cost) => FillResult {
                cost,
                filled: remaining,
                remaining: FixedI128::ZERO,
            },
            None => FillResult {
                cost: FixedI128::ZERO,
                filled: FixedI128::ZERO,
                remaining,
            },
        }
    } else {
        walk_book(book.levels(side), side, remaining, config.depth_levels)
    };

    if fill.is_partial() {
        warn!(
            %market,
            ?side,
            remaining = %fill.remaining,
            cost = %fill.cost,
            "order book depth is insufficient, fill is partial"
        );
    }

    fill
}
