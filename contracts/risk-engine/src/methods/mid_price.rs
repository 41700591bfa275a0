use common::FixedI128;
use lending_interface::types::address::Address;
use lending_interface::types::engine_config::EngineConfig;
use lending_interface::types::market_snapshot::MarketSnapshot;
use lending_interface::types::order_book::OrderBookSnapshot;
use lending_interface::types::price_quote::PriceQuote;
use tracing::debug;

/// Mid of best bid and best ask, None when either ladder is empty
pub fn calc_bbo(book: &OrderBookSnapshot) -> Option<FixedI128> {
    let best_bid = book.best_bid()?;
    let best_ask = book.best_ask()?;

    best_bid
        .price
        .checked_add(best_ask.price)?
        .checked_div(FixedI128::from_int(2)?)
}

pub fn calc_mid_price(
    snapshot: &MarketSnapshot,
    config: &EngineConfig,
    mint: &Address,
) -> PriceQuote {
    let is_stable_coin = snapshot
        .mint(mint)
        .and_then(|info| info.symbol.as_deref())
        .is_some_and(|symbol| config.is_stable_coin(symbol));

    if is_stable_coin {
        return PriceQuote::PEGGED;
    }

    let Some(market) = snapshot.market_for_mint(mint) else {
        debug!(%mint, "no market for mint");
        return PriceQuote::UNKNOWN;
    };

    let Some(book) = snapshot.order_book(market) else {
        debug!(%mint, %market, "order book is not cached");
        return PriceQuote::UNKNOWN;
    };

    match calc_bbo(book) {
        Some(price) => PriceQuote::from_book(price),
        None => {
            debug!(%mint, %market, "order book has an empty side");
            PriceQuote::UNKNOWN
        }
    }
}
