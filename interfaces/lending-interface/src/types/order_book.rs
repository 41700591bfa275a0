use common::FixedI128;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookSide {
    Bids,
    Asks,
}

/// L2 level: price and total size resting at it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: FixedI128,
    pub size: FixedI128,
}

impl BookLevel {
    pub fn new(price: FixedI128, size: FixedI128) -> Self {
        Self { price, size }
    }
}

/// Bid and ask ladders of one market. Both ladders are ordered best to worst:
/// bids by descending price, asks by ascending price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBookSnapshot {
    market: Address,
    base_mint: Address,
    quote_mint: Address,
    bids: Vec<BookLevel>,
    asks: Vec<BookLevel>,
}

impl OrderBookSnapshot {
    pub fn new(
        market: Address,
        base_mint: Address,
        quote_mint: Address,
        mut bids: Vec<BookLevel>,
        mut asks: Vec<BookLevel>,
    ) -> Result<Self, Error> {
        let is_valid = |level: &BookLevel| !level.price.is_negative() && !level.size.is_negative();

        if !bids.iter().all(is_valid) || !asks.iter().all(is_valid) {
            return Err(Error::InvalidOrderBook);
        }

        bids.sort_by(|a, b| b.price.cmp(&a.price));
        asks.sort_by(|a, b| a.price.cmp(&b.price));

        Ok(Self {
            market,
            base_mint,
            quote_mint,
            bids,
            asks,
        })
    }

    pub fn market(&self) -> &Address {
        &self.market
    }

    pub fn base_mint(&self) -> &Address {
        &self.base_mint
    }

    pub fn quote_mint(&self) -> &Address {
        &self.quote_mint
    }

    pub fn levels(&self, side: BookSide) -> &[BookLevel] {
        match side {
            BookSide::Bids => &self.bids,
            BookSide::Asks => &self.asks,
        }
    }

    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// Total size resting on one side
    pub fn depth(&self, side: BookSide) -> Option<FixedI128> {
        self.levels(side)
            .iter()
            .try_fold(FixedI128::ZERO, |acc, level| acc.checked_add(level.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(price: i128, size: i128) -> BookLevel {
        BookLevel::new(
            FixedI128::from_int(price).unwrap(),
            FixedI128::from_int(size).unwrap(),
        )
    }

    #[test]
    fn should_order_ladders_best_to_worst() {
        let book = OrderBookSnapshot::new(
            Address::generate(),
            Address::generate(),
            Address::generate(),
            vec![level(9, 1), level(10, 1), level(8, 1)],
            vec![level(13, 1), level(11, 1), level(12, 1)],
        )
        .unwrap();

        let bid_prices: Vec<_> = book.levels(BookSide::Bids).iter().map(|l| l.price).collect();
        let ask_prices: Vec<_> = book.levels(BookSide::Asks).iter().map(|l| l.price).collect();

        assert_eq!(
            bid_prices,
            vec![level(10, 0).price, level(9, 0).price, level(8, 0).price]
        );
        assert_eq!(
            ask_prices,
            vec![level(11, 0).price, level(12, 0).price, level(13, 0).price]
        );
        assert_eq!(book.best_bid(), Some(&level(10, 1)));
        assert_eq!(book.best_ask(), Some(&level(11, 1)));
    }

    #[test]
    fn should_reject_negative_levels() {
        let result = OrderBookSnapshot::new(
            Address::generate(),
            Address::generate(),
            Address::generate(),
            vec![level(10, -1)],
            vec![],
        );

        assert_eq!(result, Err(Error::InvalidOrderBook));
    }

    #[test]
    fn should_sum_depth() {
        let book = OrderBookSnapshot::new(
            Address::generate(),
            Address::generate(),
            Address::generate(),
            vec![],
            vec![level(11, 2), level(12, 3)],
        )
        .unwrap();

        assert_eq!(book.depth(BookSide::Asks), FixedI128::from_int(5));
        assert_eq!(book.depth(BookSide::Bids), Some(FixedI128::ZERO));
    }
}
