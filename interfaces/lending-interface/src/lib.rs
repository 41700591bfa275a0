#![deny(warnings)]

use std::sync::Arc;

use types::address::Address;
use types::error::Error;
use types::market_snapshot::MarketSnapshot;

pub mod types;

/// Read-only view over the external account cache.
///
/// Implementations own fetching, parsing and invalidation of accounts. The engine
/// only ever reads whole snapshots, so every figure computed from one snapshot is
/// consistent with every other figure computed from it.
pub trait SnapshotProvider {
    /// Returns the latest consistent view of cached accounts
    fn snapshot(&self) -> Arc<MarketSnapshot>;

    /// Re-fetches the given accounts. Called by the periodic driving loop with the
    /// addresses that currently have at least one watcher.
    fn refresh(&self, _accounts: &[Address]) -> Result<(), Error> {
        Ok(())
    }
}

impl<P: SnapshotProvider + ?Sized> SnapshotProvider for Arc<P> {
    fn snapshot(&self) -> Arc<MarketSnapshot> {
        (**self).snapshot()
    }

    fn refresh(&self, accounts: &[Address]) -> Result<(), Error> {
        (**self).refresh(accounts)
    }
}
