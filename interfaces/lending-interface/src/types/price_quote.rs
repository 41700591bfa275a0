use common::FixedI128;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Price in quote currency, zero when unknown
    pub price: FixedI128,
    /// True when the asset is pegged to the quote currency instead of priced by a book
    pub is_base_quote: bool,
}

impl PriceQuote {
    pub const UNKNOWN: PriceQuote = PriceQuote {
        price: FixedI128::ZERO,
        is_base_quote: false,
    };

    pub const PEGGED: PriceQuote = PriceQuote {
        price: FixedI128::ONE,
        is_base_quote: true,
    };

    pub fn from_book(price: FixedI128) -> Self {
        Self {
            price,
            is_base_quote: false,
        }
    }

    pub fn is_known(&self) -> bool {
        self.price.is_positive()
    }
}
