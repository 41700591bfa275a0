use std::collections::BTreeMap;

use common::FixedI128;
use lending_interface::types::address::Address;
use lending_interface::types::engine_config::EngineConfig;
use lending_interface::types::market_snapshot::MarketSnapshot;
use lending_interface::types::price_quote::PriceQuote;

use crate::methods::mid_price::calc_mid_price;

/// Prices mints from one snapshot, every mint is priced at most once
pub struct PriceProvider<'a> {
    snapshot: &'a MarketSnapshot,
    config: &'a EngineConfig,
    prices: BTreeMap<Address, PriceQuote>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(snapshot: &'a MarketSnapshot, config: &'a EngineConfig) -> Self {
        Self {
            snapshot,
            config,
            prices: BTreeMap::new(),
        }
    }

    pub fn snapshot(&self) -> &'a MarketSnapshot {
        self.snapshot
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    pub fn mid_price(&mut self, mint: &Address) -> PriceQuote {
        if let Some(quote) = self.prices.get(mint) {
            return *quote;
        }

        let quote = calc_mid_price(self.snapshot, self.config, mint);
        self.prices.insert(*mint, quote);

        quote
    }

    /// Value of a decimal adjusted amount of `mint` in quote currency, zero when unknown
    pub fn convert_to_quote(&mut self, mint: &Address, amount: FixedI128) -> FixedI128 {
        let price = self.mid_price(mint).price;

        amount.checked_mul(price).unwrap_or(FixedI128::ZERO)
    }
}
