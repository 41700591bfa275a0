use std::collections::{BTreeMap, BTreeSet};

use super::address::Address;
use super::lending_market::LendingMarket;
use super::mint_info::MintInfo;
use super::obligation::Obligation;
use super::order_book::OrderBookSnapshot;
use super::reserve::Reserve;
use super::token_account::TokenAccount;

/// Immutable view of every cached account the engine reads.
/// A new snapshot supersedes the previous one, it is never patched in place.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    reserves: BTreeMap<Address, Reserve>,
    obligations: BTreeMap<Address, Obligation>,
    lending_markets: BTreeMap<Address, LendingMarket>,
    order_books: BTreeMap<Address, OrderBookSnapshot>,
    mints: BTreeMap<Address, MintInfo>,
    market_by_mint: BTreeMap<Address, Address>,
    token_accounts: BTreeMap<Address, TokenAccount>,
}

impl MarketSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reserve(mut self, reserve: Reserve) -> Self {
        self.insert_reserve(reserve);
        self
    }

    pub fn with_obligation(mut self, obligation: Obligation) -> Self {
        self.insert_obligation(obligation);
        self
    }

    pub fn with_lending_market(mut self, market: LendingMarket) -> Self {
        self.insert_lending_market(market);
        self
    }

    pub fn with_order_book(mut self, book: OrderBookSnapshot) -> Self {
        self.insert_order_book(book);
        self
    }

    pub fn with_mint(mut self, mint: MintInfo) -> Self {
        self.insert_mint(mint);
        self
    }

    pub fn with_market_for_mint(mut self, mint: Address, market: Address) -> Self {
        self.insert_market_for_mint(mint, market);
        self
    }

    pub fn with_token_account(mut self, account: TokenAccount) -> Self {
        self.insert_token_account(account);
        self
    }

    pub fn insert_reserve(&mut self, reserve: Reserve) {
        self.reserves.insert(reserve.address, reserve);
    }

    pub fn insert_obligation(&mut self, obligation: Obligation) {
        self.obligations.insert(obligation.address, obligation);
    }

    pub fn insert_lending_market(&mut self, market: LendingMarket) {
        self.lending_markets.insert(market.address, market);
    }

    pub fn insert_order_book(&mut self, book: OrderBookSnapshot) {
        self.order_books.insert(*book.market(), book);
    }

    pub fn insert_mint(&mut self, mint: MintInfo) {
        self.mints.insert(mint.address, mint);
    }

    pub fn insert_market_for_mint(&mut self, mint: Address, market: Address) {
        self.market_by_mint.insert(mint, market);
    }

    pub fn insert_token_account(&mut self, account: TokenAccount) {
        self.token_accounts.insert(account.address, account);
    }

    pub fn remove_obligation(&mut self, address: &Address) -> Option<Obligation> {
        self.obligations.remove(address)
    }

    pub fn reserve(&self, address: &Address) -> Option<&Reserve> {
        self.reserves.get(address)
    }

    pub fn reserves(&self) -> impl Iterator<Item = &Reserve> {
        self.reserves.values()
    }

    pub fn obligation(&self, address: &Address) -> Option<&Obligation> {
        self.obligations.get(address)
    }

    pub fn obligations(&self) -> impl Iterator<Item = &Obligation> {
        self.obligations.values()
    }

    pub fn obligations_of<'a>(
        &'a self,
        owner: &'a Address,
    ) -> impl Iterator<Item = &'a Obligation> {
        self.obligations.values().filter(move |o| o.owner == *owner)
    }

    pub fn lending_market(&self, address: &Address) -> Option<&LendingMarket> {
        self.lending_markets.get(address)
    }

    pub fn order_book(&self, market: &Address) -> Option<&OrderBookSnapshot> {
        self.order_books.get(market)
    }

    pub fn mint(&self, address: &Address) -> Option<&MintInfo> {
        self.mints.get(address)
    }

    /// Decimals of a mint, zero when the mint is not cached yet
    pub fn mint_decimals(&self, address: &Address) -> u8 {
        self.mints.get(address).map(|m| m.decimals).unwrap_or_default()
    }

    pub fn market_for_mint(&self, mint: &Address) -> Option<&Address> {
        self.market_by_mint.get(mint)
    }

    /// Mints which have an order book market assigned
    pub fn priced_mints(&self) -> BTreeSet<Address> {
        self.market_by_mint.keys().copied().collect()
    }

    pub fn token_accounts_of<'a>(
        &'a self,
        owner: &'a Address,
    ) -> impl Iterator<Item = &'a TokenAccount> {
        self.token_accounts.values().filter(move |a| a.owner == *owner)
    }

    pub fn reserve_by_collateral_mint(&self, mint: &Address) -> Option<&Reserve> {
        self.reserves.values().find(|r| r.collateral_mint == *mint)
    }

    pub fn reserve_by_liquidity_mint(&self, mint: &Address) -> Option<&Reserve> {
        self.reserves.values().find(|r| r.liquidity_mint == *mint)
    }

    /// Addresses of every account the snapshot was built from
    pub fn addresses(&self) -> Vec<Address> {
        self.reserves
            .keys()
            .chain(self.obligations.keys())
            .chain(self.lending_markets.keys())
            .chain(self.order_books.keys())
            .chain(self.mints.keys())
            .chain(self.token_accounts.keys())
            .copied()
            .collect()
    }
}
